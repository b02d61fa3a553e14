//! Token error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tokens format")]
    InvalidFormat,

    #[error("Invalid token group '{0}': must be an object")]
    InvalidGroup(String),

    #[error("Invalid token '{group}.{token}': must be an object with a 'value' string property")]
    InvalidToken { group: String, token: String },
}
