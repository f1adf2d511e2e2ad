pub mod credential_loader;
pub mod sync_actor;
pub mod sync_runner;
pub mod sync_steps;

pub use sync_actor::SyncHandle;
pub use sync_runner::{Directive, ProcessRunner, SchemaAdmin, SyncRunner};
pub use sync_steps::SyncSteps;
