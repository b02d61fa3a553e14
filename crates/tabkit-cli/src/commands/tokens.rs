//! Design token build
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use tabkit_core::{build_tokens, DEFAULT_TOKENS_INPUT, DEFAULT_TOKENS_OUTPUT};

#[derive(Debug, Args)]
pub struct TokensArgs {
    /// Token JSON file
    #[arg(long, default_value = DEFAULT_TOKENS_INPUT)]
    pub input: PathBuf,

    /// Stylesheet to write
    #[arg(long, default_value = DEFAULT_TOKENS_OUTPUT)]
    pub output: PathBuf,
}

pub fn run(args: &TokensArgs) -> anyhow::Result<()> {
    let count = build_tokens(&args.input, &args.output)
        .with_context(|| format!("Failed to build tokens from {}", args.input.display()))?;

    tracing::info!(count, output = %args.output.display(), "variables.css newly generated");
    Ok(())
}
