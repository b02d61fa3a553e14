//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tabs error: {0}")]
    Tabs(#[from] tabkit_group::TabsError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] tabkit_navigation::NavigationError),

    #[error("Token error: {0}")]
    Tokens(#[from] tabkit_tokens::TokenError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
