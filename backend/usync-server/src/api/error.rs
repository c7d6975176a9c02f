//! REST API error types
//!
//! Every error leaves as `{"error": {"code", "message", "field"?, "remote_body"?}}`.

use usync_db::DbError;
use usync_sync::SyncError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "REMOTE_FAILURE")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The remote directory's response body, verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_body: Option<Value>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Email already taken (400)
    #[error("Duplicate email: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Remote directory refused or could not be reached (remote status, or 502)
    #[error("Remote directory failure ({status_code}): {body} {location}")]
    Remote {
        status_code: u16,
        body: Value,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                    remote_body: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                    remote_body: None,
                },
            ),
            ApiError::DuplicateEmail { email, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "DUPLICATE_EMAIL".into(),
                    message: format!("User with email {} already exists", email),
                    field: Some("email".into()),
                    remote_body: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                    remote_body: None,
                },
            ),
            ApiError::Remote {
                status_code, body, ..
            } => (
                remote_status(status_code),
                ApiErrorBody {
                    code: "REMOTE_FAILURE".into(),
                    message: format!("Remote directory answered {}", status_code),
                    field: None,
                    remote_body: Some(body),
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                    remote_body: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// The remote's own status when it is a usable HTTP status, 502 otherwise
fn remote_status(status_code: u16) -> StatusCode {
    match StatusCode::from_u16(status_code) {
        Ok(status) if !status.is_informational() => status,
        _ => StatusCode::BAD_GATEWAY,
    }
}

impl From<SyncError> for ApiError {
    #[track_caller]
    fn from(e: SyncError) -> Self {
        match e {
            SyncError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            SyncError::DuplicateEmail { email, .. } => ApiError::DuplicateEmail {
                email,
                location: ErrorLocation::from(Location::caller()),
            },
            SyncError::NotFound { message, .. } => ApiError::NotFound {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            SyncError::Remote { source } => ApiError::Remote {
                status_code: source.status_code,
                body: source.body,
                location: ErrorLocation::from(Location::caller()),
            },
            SyncError::Store { source, .. } => ApiError::from(source),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        match e {
            DbError::DuplicateEmail { email, .. } => ApiError::DuplicateEmail {
                email,
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::NotFound { message, .. } => ApiError::NotFound {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Malformed or incomplete JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation {
            message: e.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
