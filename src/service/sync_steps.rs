use crate::error::ExplorerError;
use crate::service::sync_runner::{Directive, SchemaAdmin, SyncRunner};
use crate::types::credentials::Credentials;
use std::sync::Arc;
use tracing::info;

pub const SYNC_COMPLETE: &str = "Sync complete!";

/// The drop / migrate / backfill steps, shared by startup and the sync actor.
pub struct SyncSteps {
    runner: Arc<dyn SyncRunner>,
    admin: Arc<dyn SchemaAdmin>,
    creds: Credentials,
    schema: String,
    backfill_object: String,
}

impl SyncSteps {
    pub fn new(
        runner: Arc<dyn SyncRunner>,
        admin: Arc<dyn SchemaAdmin>,
        creds: Credentials,
        schema: impl Into<String>,
        backfill_object: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            admin,
            creds,
            schema: schema.into(),
            backfill_object: backfill_object.into(),
        }
    }

    pub async fn nuke(&self) -> Result<(), ExplorerError> {
        self.admin.drop_schema().await
    }

    pub async fn migrate(&self) -> Result<(), ExplorerError> {
        info!("[sync] Running migrations...");
        let code = self.runner.run(&Directive::Migrate, &self.creds).await?;
        if code != 0 {
            return Err(ExplorerError::Migration { code });
        }
        info!("[sync] Migrations complete.");
        Ok(())
    }

    pub async fn backfill(&self, object: &str) -> Result<(), ExplorerError> {
        info!(object, "[sync] Backfilling from Stripe (this may take a while)...");
        let directive = Directive::Backfill {
            object: object.to_string(),
        };
        let code = self.runner.run(&directive, &self.creds).await?;
        if code != 0 {
            return Err(ExplorerError::Backfill { code });
        }
        info!(object, "[sync] Backfill complete.");
        Ok(())
    }

    /// Migrate then backfill the configured object scope.
    pub async fn full_sync(&self) -> Result<(), ExplorerError> {
        self.migrate().await?;
        self.backfill(&self.backfill_object).await
    }

    /// Stops at the first failing step. `progress` sees each step's message first.
    pub async fn nuke_and_resync(
        &self,
        progress: &(dyn Fn(String) + Send + Sync),
    ) -> Result<(), ExplorerError> {
        progress(format!("Dropping {} schema...", self.schema));
        self.nuke().await?;

        progress("Running migrations...".to_string());
        self.migrate().await?;

        progress("Backfilling Stripe data (this may take a while)...".to_string());
        self.backfill(&self.backfill_object).await
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Counts invocations; optionally parks or panics in `migrate`.
    #[derive(Default)]
    pub struct FakeRunner {
        pub migrate_calls: AtomicUsize,
        pub backfill_calls: AtomicUsize,
        pub migrate_code: i32,
        pub backfill_code: i32,
        pub gate: Option<Arc<Notify>>,
        pub panic_on_migrate: bool,
        pub backfill_objects: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SyncRunner for FakeRunner {
        async fn run(&self, directive: &Directive, _creds: &Credentials) -> Result<i32, ExplorerError> {
            match directive {
                Directive::Migrate => {
                    self.migrate_calls.fetch_add(1, Ordering::SeqCst);
                    if let Some(gate) = &self.gate {
                        gate.notified().await;
                    }
                    if self.panic_on_migrate {
                        panic!("engine crashed");
                    }
                    Ok(self.migrate_code)
                }
                Directive::Backfill { object } => {
                    self.backfill_calls.fetch_add(1, Ordering::SeqCst);
                    self.backfill_objects
                        .lock()
                        .expect("fake runner mutex poisoned")
                        .push(object.clone());
                    Ok(self.backfill_code)
                }
            }
        }
    }

    #[derive(Default)]
    pub struct FakeAdmin {
        pub calls: AtomicUsize,
        pub fail: bool,
    }

    #[async_trait]
    impl SchemaAdmin for FakeAdmin {
        async fn drop_schema(&self) -> Result<(), ExplorerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ExplorerError::SchemaDrop(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }
    }

    pub fn creds() -> Credentials {
        Credentials::new("sk_test_fake", "postgres://fake/db").expect("valid fake credentials")
    }

    pub fn steps(runner: Arc<FakeRunner>, admin: Arc<FakeAdmin>) -> SyncSteps {
        SyncSteps::new(runner, admin, creds(), "stripe", "all")
    }
}
