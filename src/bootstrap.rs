use crate::config::Config;
use crate::db::{ConnectionProbe, QueryGateway};
use crate::error::ExplorerError;
use crate::router::{ExplorerState, explorer_router};
use crate::service::credential_loader::{load_config, prompt_for_config};
use crate::service::{ProcessRunner, SyncRunner, SyncSteps, sync_actor};
use crate::types::cli::Cli;
use crate::types::credentials::Credentials;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// A full sync is needed when forced or when the schema does not look migrated.
pub fn should_sync(force: bool, ready: bool) -> bool {
    force || !ready
}

/// Environment, then key file, then an interactive prompt.
pub async fn resolve_credentials(cfg: &Config) -> Result<Credentials, ExplorerError> {
    match load_config(&cfg.env_file)? {
        Some(creds) => {
            info!(
                path = %cfg.env_file.display(),
                database = %creds.redacted_database_url(),
                stripe_key = %creds.key_hint(),
                "Using existing config"
            );
            Ok(creds)
        }
        None => prompt_for_config(&cfg.env_file).await,
    }
}

/// Awaited before the server exists, so nothing else can trigger a sync.
/// Returns whether a sync ran.
pub async fn startup_sync<F>(cli: &Cli, steps: &SyncSteps, is_ready: F) -> Result<bool, ExplorerError>
where
    F: Future<Output = bool>,
{
    if cli.nuke {
        info!("Nuking database...");
        steps.nuke().await?;
    }

    let force = cli.forces_sync();
    let ready = !force && is_ready.await;
    if !should_sync(force, ready) {
        info!("Database already has Stripe data, skipping sync.");
        return Ok(false);
    }

    info!("Running sync...");
    steps.full_sync().await?;
    Ok(true)
}

fn build_steps(cfg: &Config, creds: &Credentials, probe: &ConnectionProbe) -> Result<SyncSteps, ExplorerError> {
    let (program, base_args) = cfg
        .sync_engine_argv()
        .ok_or_else(|| ExplorerError::Config("sync_engine_command is empty".to_string()))?;
    let runner: Arc<dyn SyncRunner> = Arc::new(ProcessRunner::new(program, base_args));
    Ok(SyncSteps::new(
        runner,
        Arc::new(probe.clone()),
        creds.clone(),
        cfg.schema.clone(),
        cfg.backfill_object.clone(),
    ))
}

/// Startup sequence, then serve until a termination signal.
pub async fn run(cli: Cli, cfg: &Config) -> Result<(), ExplorerError> {
    if cli.nuke {
        info!("--nuke flag: will drop and recreate everything");
    } else if cli.resync {
        info!("--resync flag: will re-run migrate + backfill");
    }

    let creds = resolve_credentials(cfg).await?;

    let probe = ConnectionProbe::new(
        creds.database_url.clone(),
        cfg.schema.clone(),
        cfg.acquire_timeout(),
    );
    if let Err(e) = probe.test_connection().await {
        error!("Failed to connect to PostgreSQL: {e}");
        error!("Make sure PostgreSQL is running. You can use the included docker-compose.yml: docker compose up -d");
        return Err(e);
    }
    info!("Database connection OK.");

    let steps = build_steps(cfg, &creds, &probe)?;
    startup_sync(&cli, &steps, probe.is_database_ready(cfg.ready_table_threshold)).await?;

    serve(cfg, &creds, steps).await
}

async fn serve(cfg: &Config, creds: &Credentials, steps: SyncSteps) -> Result<(), ExplorerError> {
    let gateway = QueryGateway::connect_lazy(
        &creds.database_url,
        cfg.max_connections,
        cfg.acquire_timeout(),
    )?;
    let sync = sync_actor::spawn(steps).await?;

    let state = ExplorerState::new(sync.clone(), gateway.clone(), cfg.schema.as_str());
    let app = explorer_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Web UI running at http://{}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sync.stop();
    gateway.pool().close().await;
    info!("Connection pool closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutting down...");
}
