//! Warehouse access.
//!
//! Layout:
//! - `probe.rs`: short-lived connections for reachability, readiness and schema drop
//! - `query.rs`: the shared pool behind `/api/query` and `/api/tables`
//! - `models.rs`: response rows and query results
//! - `schema.rs`: fixed SQL statements

pub mod models;
pub mod probe;
pub mod query;
pub mod schema;

pub use models::{QueryResult, TableStat};
pub use probe::ConnectionProbe;
pub use query::QueryGateway;
