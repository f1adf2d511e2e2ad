use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ExplorerError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Database connection failed: {0}")]
    Connection(#[source] SqlxError),

    #[error("Migration failed with exit code {code}")]
    Migration { code: i32 },

    #[error("Backfill failed with exit code {code}")]
    Backfill { code: i32 },

    #[error("Schema drop failed: {0}")]
    SchemaDrop(#[source] SqlxError),

    #[error("{0}")]
    Query(String),

    #[error("Empty query")]
    EmptyQuery,

    #[error("Sync already in progress")]
    SyncInProgress,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),
}

impl ExplorerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExplorerError::Query(_) | ExplorerError::EmptyQuery => StatusCode::BAD_REQUEST,
            ExplorerError::SyncInProgress => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Database errors reported while running caller SQL are the caller's problem.
impl From<SqlxError> for ExplorerError {
    fn from(e: SqlxError) -> Self {
        match e {
            SqlxError::Database(db) => ExplorerError::Query(db.message().to_string()),
            other => ExplorerError::Query(other.to_string()),
        }
    }
}

impl IntoResponse for ExplorerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "An internal server error occurred.".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Error body shared by every JSON endpoint.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
