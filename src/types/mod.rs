pub mod cli;
pub mod credentials;
pub mod saved_query;
pub mod sync_status;
