use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

/// Runtime settings, overridable through `EXPLORER_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub loglevel: String,
    /// Schema the sync engine writes into.
    pub schema: String,
    /// More base tables than this in `schema` means migrations already ran.
    pub ready_table_threshold: i64,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Program plus leading arguments, split on whitespace.
    pub sync_engine_command: String,
    pub backfill_object: String,
    pub env_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
            loglevel: "info".to_string(),
            schema: "stripe".to_string(),
            ready_table_threshold: 5,
            max_connections: 10,
            acquire_timeout_secs: 5,
            sync_engine_command: "bunx @paymentsdb/sync-engine".to_string(),
            backfill_object: "all".to_string(),
            env_file: PathBuf::from(".env"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("EXPLORER_"))
            .extract()
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs.max(1))
    }

    /// Split `sync_engine_command` into program and leading arguments.
    pub fn sync_engine_argv(&self) -> Option<(String, Vec<String>)> {
        let mut parts = self.sync_engine_command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some((program, parts.collect()))
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        eprintln!("invalid EXPLORER_* configuration, using defaults: {e}");
        Config::default()
    })
});
