//! File-level token build

use std::fs;
use std::path::Path;

use crate::tokens::{generate_css, parse_tokens};
use crate::Result;

pub const DEFAULT_INPUT: &str = "design-tokens.json";
pub const DEFAULT_OUTPUT: &str = "src/styles/variables.css";

/// Read `input`, validate it, and write the generated stylesheet to
/// `output`, creating parent directories as needed. Returns the number of
/// variables written.
pub fn build_tokens(input: &Path, output: &Path) -> Result<usize> {
    let raw = fs::read_to_string(input)?;
    let tokens = parse_tokens(&raw)?;
    let css = generate_css(&tokens);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, css)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        tokens = tokens.token_count(),
        "Generated CSS variables"
    );

    Ok(tokens.token_count())
}
