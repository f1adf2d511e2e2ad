//! SQL used against the warehouse outside of caller-submitted statements.
//! Identifiers that cannot be bound as parameters go through [`quote_ident`].

pub const PING: &str = "SELECT 1";

/// Bind: `$1` schema name.
pub const COUNT_BASE_TABLES: &str = r#"
SELECT COUNT(*)
FROM information_schema.tables
WHERE table_schema = $1
  AND table_type = 'BASE TABLE'
"#;

/// Bind: `$1` schema name.
pub const LIST_TABLE_STATS: &str = r#"
SELECT
    schemaname || '.' || relname AS table_name,
    n_live_tup AS estimated_rows
FROM pg_stat_user_tables
WHERE schemaname = $1
ORDER BY n_live_tup DESC
"#;

pub fn drop_schema_sql(schema: &str) -> String {
    format!("DROP SCHEMA IF EXISTS {} CASCADE", quote_ident(schema))
}

/// Double-quote a Postgres identifier, escaping embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
