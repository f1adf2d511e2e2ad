use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::types::sync_status::StatusReport;
use crate::{ExplorerError, router::ExplorerState};

/// POST /api/nuke -> starts a background drop + migrate + backfill; poll /api/status.
pub async fn nuke_handler(State(state): State<ExplorerState>) -> Result<Json<Value>, ExplorerError> {
    state.sync.nuke_and_resync().await?;
    Ok(Json(json!({ "status": "started" })))
}

pub async fn status_handler(State(state): State<ExplorerState>) -> Json<StatusReport> {
    Json(StatusReport::from(&state.sync.status()))
}
