pub mod client;

#[cfg(test)]
mod tests;

pub use client::client::{API_KEY_HEADER, DirectoryClient, RemoteOutcome, remote_id_of};
pub use client::error::{DirectoryError, Result as DirectoryResult};
pub use client::remote_failure::{RemoteFailure, TRANSPORT_FAILURE_STATUS};
