use thiserror::Error;

/// Failures of the server's own setup; library errors propagate as-is
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
