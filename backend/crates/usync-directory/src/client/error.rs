use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors building the directory client
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("HTTP client error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl DirectoryError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        DirectoryError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for DirectoryError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        DirectoryError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
