//! Keeps the local user ledger and the remote directory in step.
//!
//! The remote directory is the system of record: reads go only to it, and a
//! local insert stays provisional until the directory confirms the create.

pub mod bootstrap;
pub mod error;
pub mod ports;
pub mod service;

#[cfg(test)]
mod tests;

pub use bootstrap::{BootstrapReport, run_bootstrap};
pub use error::{BootstrapError, Result as SyncResult, SyncError};
pub use ports::user_directory::UserDirectory;
pub use ports::user_store::UserStore;
pub use service::UserSyncService;
