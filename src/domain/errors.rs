// src/domain/errors.rs
use thiserror::Error;

/// Failure of a single timed request.
///
/// Only transport-level problems land here. A response with a 4xx/5xx status
/// is still a successful call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Read error: {0}")]
    Read(String),
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Serialization(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type RequestResult<T> = Result<T, RequestError>;
