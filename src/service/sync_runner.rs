use crate::error::ExplorerError;
use crate::types::credentials::Credentials;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// One invocation of the external sync engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Migrate,
    Backfill { object: String },
}

impl Directive {
    /// Engine arguments, secrets included.
    pub fn args(&self, creds: &Credentials) -> Vec<String> {
        match self {
            Directive::Migrate => vec![
                "migrate".to_string(),
                "--database-url".to_string(),
                creds.database_url.clone(),
            ],
            Directive::Backfill { object } => vec![
                "backfill".to_string(),
                object.clone(),
                "--stripe-key".to_string(),
                creds.secret_key.clone(),
                "--database-url".to_string(),
                creds.database_url.clone(),
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Directive::Migrate => "migrate",
            Directive::Backfill { .. } => "backfill",
        }
    }
}

/// Runs the sync engine and reports its exit code.
#[async_trait]
pub trait SyncRunner: Send + Sync {
    async fn run(&self, directive: &Directive, creds: &Credentials) -> Result<i32, ExplorerError>;
}

/// Drops the warehouse schema ahead of a full rebuild.
#[async_trait]
pub trait SchemaAdmin: Send + Sync {
    async fn drop_schema(&self) -> Result<(), ExplorerError>;
}

/// Spawns the engine as a child process with inherited stdio.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    base_args: Vec<String>,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
        }
    }
}

#[async_trait]
impl SyncRunner for ProcessRunner {
    async fn run(&self, directive: &Directive, creds: &Credentials) -> Result<i32, ExplorerError> {
        debug!(program = %self.program, directive = directive.name(), "spawning sync engine");
        let status = Command::new(&self.program)
            .args(&self.base_args)
            .args(directive.args(creds))
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        // Killed by a signal: no code to report.
        let code = status.code().unwrap_or(-1);
        if code != 0 {
            warn!(directive = directive.name(), code, "sync engine exited with failure");
        }
        Ok(code)
    }
}
