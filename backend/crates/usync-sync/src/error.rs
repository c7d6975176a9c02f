use usync_core::{CoreError, ErrorLocation};
use usync_db::DbError;
use usync_directory::RemoteFailure;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("User with the same email already exists: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("User not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Remote {
        #[source]
        source: RemoteFailure,
    },

    #[error("Local store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<DbError> for SyncError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateEmail { email, .. } => SyncError::DuplicateEmail {
                email,
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::NotFound { message, .. } => SyncError::NotFound {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => SyncError::Store {
                source: other,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<CoreError> for SyncError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => SyncError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::RemotePayload { source, .. } => SyncError::Validation {
                message: format!("Remote payload rejected: {}", source),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<RemoteFailure> for SyncError {
    fn from(source: RemoteFailure) -> Self {
        SyncError::Remote { source }
    }
}

/// Startup population failures. Any of these aborts startup.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Bootstrap fetch of remote user {remote_id} failed: {source} {location}")]
    Fetch {
        remote_id: i64,
        #[source]
        source: SyncError,
        location: ErrorLocation,
    },

    #[error("Bootstrap got an unreadable payload for remote user {remote_id}: {source} {location}")]
    Payload {
        remote_id: i64,
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Bootstrap could not mirror remote user {remote_id}: {source} {location}")]
    Mirror {
        remote_id: i64,
        #[source]
        source: SyncError,
        location: ErrorLocation,
    },

    #[error("Bootstrap delete of user {remote_id} failed: {source} {location}")]
    Delete {
        remote_id: i64,
        #[source]
        source: SyncError,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;
