use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;
use tracing::warn;

use crate::db::{QueryResult, TableStat};
use crate::types::saved_query::{SAVED_QUERIES, SavedQuery};
use crate::{ExplorerError, router::ExplorerState};

#[derive(Debug, Default, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub sql: Option<String>,
}

/// POST /api/query -> runs the submitted statement verbatim.
pub async fn query_handler(
    State(state): State<ExplorerState>,
    body: Bytes,
) -> Result<Json<QueryResult>, ExplorerError> {
    let req: QueryRequest = serde_json::from_slice(&body)
        .map_err(|e| ExplorerError::Query(format!("invalid request body: {e}")))?;
    let sql = req.sql.unwrap_or_default();

    let result = state.gateway.execute(&sql).await.inspect_err(|e| {
        warn!(error = %e, "query rejected");
    })?;
    Ok(Json(result))
}

/// GET /api/tables -> live row estimates for the warehouse schema.
pub async fn tables_handler(
    State(state): State<ExplorerState>,
) -> Result<Json<Vec<TableStat>>, ExplorerError> {
    Ok(Json(state.gateway.list_tables(&state.schema).await?))
}

pub async fn saved_queries_handler() -> Json<&'static [SavedQuery]> {
    Json(SAVED_QUERIES)
}
