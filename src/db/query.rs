use crate::db::models::{QueryResult, TableStat};
use crate::db::schema::LIST_TABLE_STATS;
use crate::error::ExplorerError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Column, Connection, Executor, Row, Statement, TypeInfo, ValueRef};
use std::time::{Duration, Instant};
use tracing::debug;

/// Runs caller SQL verbatim on the shared pool.
#[derive(Clone)]
pub struct QueryGateway {
    pool: PgPool,
}

impl QueryGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the shared pool. Connections are opened on first use.
    pub fn connect_lazy(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, ExplorerError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_lazy(database_url)
            .map_err(ExplorerError::Connection)?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Describe the statement for its columns, then run it over the simple
    /// query protocol so every value comes back in Postgres' text form.
    pub async fn execute(&self, sql: &str) -> Result<QueryResult, ExplorerError> {
        if sql.trim().is_empty() {
            return Err(ExplorerError::EmptyQuery);
        }

        let started = Instant::now();
        let mut conn = self.pool.acquire().await?;
        // Cached descriptions go stale once DDL changes a table's shape.
        conn.clear_cached_statements().await?;
        let columns: Vec<String> = (&mut *conn)
            .prepare(sql)
            .await?
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let (rows, row_count) = if columns.is_empty() {
            let done = (&mut *conn).execute(sqlx::raw_sql(sql)).await?;
            (Vec::new(), done.rows_affected())
        } else {
            let rows = (&mut *conn).fetch_all(sqlx::raw_sql(sql)).await?;
            let count = rows.len() as u64;
            (rows.iter().map(row_to_json).collect(), count)
        };
        drop(conn);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        debug!(row_count, elapsed_ms, "query executed");
        Ok(QueryResult {
            columns,
            rows,
            row_count,
            elapsed_ms,
        })
    }

    pub async fn list_tables(&self, schema: &str) -> Result<Vec<TableStat>, ExplorerError> {
        let rows = sqlx::query_as::<_, TableStat>(LIST_TABLE_STATS)
            .bind(schema)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

fn row_to_json(row: &PgRow) -> Map<String, Value> {
    row.columns()
        .iter()
        .map(|col| (col.name().to_string(), column_value(row, col.ordinal())))
        .collect()
}

fn column_value(row: &PgRow, idx: usize) -> Value {
    let Ok(raw) = row.try_get_raw(idx) else {
        return Value::Null;
    };
    if raw.is_null() {
        return Value::Null;
    }
    let type_name = raw.type_info().name().to_string();
    let Ok(text) = raw.as_str() else {
        debug!(column = idx, type_name, "column value is not valid utf-8");
        return Value::Null;
    };
    if type_name == "TIMESTAMPTZ" {
        if let Ok(ts) = row.try_get::<DateTime<Utc>, _>(idx) {
            return Value::String(ts.to_rfc3339());
        }
    }
    text_value(&type_name, text)
}

/// Map a value in Postgres text form onto JSON. Types without a natural JSON
/// shape keep their text, so numerics and int8 never lose precision.
pub(crate) fn text_value(type_name: &str, text: &str) -> Value {
    let typed = match type_name {
        "BOOL" => match text {
            "t" => Some(Value::Bool(true)),
            "f" => Some(Value::Bool(false)),
            _ => None,
        },
        "INT2" | "INT4" | "INT8" => text.parse::<i64>().ok().map(Value::from),
        "FLOAT4" | "FLOAT8" => text
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        "JSON" | "JSONB" => serde_json::from_str(text).ok(),
        _ => None,
    };
    typed.unwrap_or_else(|| Value::String(text.to_string()))
}
