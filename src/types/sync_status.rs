use serde::Serialize;

/// State of the nuke-and-resync job. `Error` is left by starting a new run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    Idle { message: Option<String> },
    Syncing { message: String },
    Error { message: String },
}

impl Default for SyncStatus {
    fn default() -> Self {
        SyncStatus::Idle { message: None }
    }
}

impl SyncStatus {
    pub fn is_syncing(&self) -> bool {
        matches!(self, SyncStatus::Syncing { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SyncStatus::Idle { .. } => "idle",
            SyncStatus::Syncing { .. } => "syncing",
            SyncStatus::Error { .. } => "error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SyncStatus::Idle { message } => message.as_deref().unwrap_or(""),
            SyncStatus::Syncing { message } | SyncStatus::Error { message } => message,
        }
    }
}

/// Wire form served by `/api/status`.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub status: &'static str,
    pub message: String,
}

impl From<&SyncStatus> for StatusReport {
    fn from(s: &SyncStatus) -> Self {
        Self {
            status: s.kind(),
            message: s.message().to_string(),
        }
    }
}
