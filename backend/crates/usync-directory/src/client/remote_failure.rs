use error_location::ErrorLocation;
use serde_json::Value;
use std::panic::Location;
use thiserror::Error;

/// Status reported when the directory could not be reached or answered with
/// something unreadable.
pub const TRANSPORT_FAILURE_STATUS: u16 = 502;

/// Any answer from the remote directory other than the expected status.
#[derive(Error, Debug)]
#[error("Remote directory failure (status {status_code}): {body} {location}")]
pub struct RemoteFailure {
    pub status_code: u16,
    /// Response body; a JSON string if the body was not JSON, null if empty
    pub body: Value,
    pub location: ErrorLocation,
}

impl RemoteFailure {
    #[track_caller]
    pub fn new(status_code: u16, body: Value) -> Self {
        Self {
            status_code,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(err: reqwest::Error) -> Self {
        Self::new(
            TRANSPORT_FAILURE_STATUS,
            Value::String(format!("Remote directory unreachable: {}", err)),
        )
    }

    #[track_caller]
    pub fn malformed(status_code: u16, detail: impl std::fmt::Display) -> Self {
        Self::new(
            TRANSPORT_FAILURE_STATUS,
            Value::String(format!(
                "Remote directory answered {} with an unreadable body: {}",
                status_code, detail
            )),
        )
    }
}
