//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown focus direction: {0}")]
    UnknownDirection(String),

    #[error("Unknown orientation: {0}")]
    UnknownOrientation(String),
}
