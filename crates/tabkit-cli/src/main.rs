//! tabkit command line
//!
//! - `tabkit tokens` regenerates the CSS variables from the design tokens
//! - `tabkit preview` prints the attributes a view would render for a group

mod commands;

use clap::{Parser, Subcommand};

use commands::preview::PreviewArgs;
use commands::tokens::TokensArgs;

#[derive(Debug, Parser)]
#[command(name = "tabkit", version, about = "Tab widget tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate CSS custom properties from a design token file
    Tokens(TokensArgs),
    /// Print derived tab and panel attributes as JSON
    Preview(PreviewArgs),
}

fn main() -> anyhow::Result<()> {
    tabkit_core::init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Tokens(args) => commands::tokens::run(&args),
        Command::Preview(args) => {
            let output = commands::preview::run(&args)?;
            println!("{}", output);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabkit_core::FocusDirection;

    #[test]
    fn test_parse_preview_moves() {
        let cli = Cli::try_parse_from([
            "tabkit", "preview", "--tab", "a", "--tab", "b", "--move", "next", "--move", "end",
        ])
        .unwrap();
        match cli.command {
            Command::Preview(args) => {
                assert_eq!(args.moves, vec![FocusDirection::Next, FocusDirection::Last]);
            }
            Command::Tokens(_) => panic!("expected preview"),
        }
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let result = Cli::try_parse_from(["tabkit", "preview", "--tab", "a", "--move", "sideways"]);
        assert!(result.is_err());
    }
}
