use crate::db::schema::{COUNT_BASE_TABLES, PING, drop_schema_sql};
use crate::error::ExplorerError;
use crate::service::sync_runner::SchemaAdmin;
use async_trait::async_trait;
use sqlx::Error as SqlxError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{debug, info};

/// Opens a throwaway single-connection pool per check.
#[derive(Debug, Clone)]
pub struct ConnectionProbe {
    database_url: String,
    schema: String,
    acquire_timeout: Duration,
}

impl ConnectionProbe {
    pub fn new(
        database_url: impl Into<String>,
        schema: impl Into<String>,
        acquire_timeout: Duration,
    ) -> Self {
        Self {
            database_url: database_url.into(),
            schema: schema.into(),
            acquire_timeout,
        }
    }

    async fn open(&self) -> Result<PgPool, SqlxError> {
        PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.database_url)
            .await
    }

    pub async fn test_connection(&self) -> Result<(), ExplorerError> {
        let pool = self.open().await.map_err(ExplorerError::Connection)?;
        let res = sqlx::query(PING).execute(&pool).await;
        pool.close().await;
        res.map(|_| ()).map_err(ExplorerError::Connection)
    }

    pub async fn count_base_tables(&self) -> Result<i64, SqlxError> {
        let pool = self.open().await?;
        let res = sqlx::query_scalar::<_, i64>(COUNT_BASE_TABLES)
            .bind(&self.schema)
            .fetch_one(&pool)
            .await;
        pool.close().await;
        res
    }

    /// Best effort: any failure reads as "not ready".
    pub async fn is_database_ready(&self, threshold: i64) -> bool {
        match self.count_base_tables().await {
            Ok(count) => {
                debug!(schema = %self.schema, count, threshold, "base table count");
                count > threshold
            }
            Err(e) => {
                debug!(schema = %self.schema, error = %e, "readiness check failed; treating as not ready");
                false
            }
        }
    }
}

#[async_trait]
impl SchemaAdmin for ConnectionProbe {
    async fn drop_schema(&self) -> Result<(), ExplorerError> {
        info!(schema = %self.schema, "dropping schema");
        let pool = self.open().await.map_err(ExplorerError::Connection)?;
        let res = sqlx::query(&drop_schema_sql(&self.schema))
            .execute(&pool)
            .await;
        pool.close().await;
        res.map_err(ExplorerError::SchemaDrop)?;
        info!(schema = %self.schema, "schema dropped");
        Ok(())
    }
}
