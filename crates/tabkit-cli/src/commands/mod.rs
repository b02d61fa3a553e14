//! Subcommands
pub mod preview;
pub mod tokens;
