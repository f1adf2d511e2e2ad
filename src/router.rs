use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::db::QueryGateway;
use crate::handlers::{
    query::{query_handler, saved_queries_handler, tables_handler},
    sync::{nuke_handler, status_handler},
    ui::{not_found, ui_handler},
};
use crate::service::SyncHandle;

#[derive(Clone)]
pub struct ExplorerState {
    pub sync: SyncHandle,
    pub gateway: QueryGateway,
    pub schema: Arc<str>,
}

impl ExplorerState {
    pub fn new(sync: SyncHandle, gateway: QueryGateway, schema: impl Into<Arc<str>>) -> Self {
        Self {
            sync,
            gateway,
            schema: schema.into(),
        }
    }
}

pub fn explorer_router(state: ExplorerState) -> Router {
    Router::new()
        .route("/", get(ui_handler))
        .route("/api/queries", get(saved_queries_handler))
        .route("/api/query", post(query_handler))
        .route("/api/nuke", post(nuke_handler))
        .route("/api/status", get(status_handler))
        .route("/api/tables", get(tables_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
}
