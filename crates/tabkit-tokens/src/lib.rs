//! tabkit Design Tokens
//!
//! Turns a nested `group -> token -> { value }` JSON mapping into a flat
//! list of CSS custom properties inside a single `:root` block.

mod build;
mod error;
mod tokens;

pub use build::{build_tokens, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use error::TokenError;
pub use tokens::{generate_css, kebab_case, parse_tokens, Token, TokenGroup, TokenSet};

pub type Result<T> = std::result::Result<T, TokenError>;
