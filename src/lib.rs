pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod types;

pub use error::ExplorerError;
pub use types::credentials::Credentials;
pub use types::sync_status::SyncStatus;
