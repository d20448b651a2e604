#![deny(missing_docs)]

//! # Paramdoc CLI
//!
//! Command Line Interface for the documentation section parser.
//!
//! Supported Commands:
//! - `parse`: Parses one section into a specification and prints it as JSON.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod error;
mod parse;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Documentation section parser")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse one documentation section into a parameter specification.
    Parse(parse::ParseArgs),
}

/// Logs go to stderr so JSON on stdout stays clean. `RUST_LOG` overrides
/// the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        eprintln!("warning: a tracing subscriber is already installed");
    }
}

fn main() -> CliResult<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse(args) => parse::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_section_flag() {
        let cli = Cli::try_parse_from(["paramdoc", "parse", "--section", "errors", "in.txt"]).unwrap();
        let Commands::Parse(args) = cli.command;
        assert_eq!(args.section, paramdoc_core::SectionKind::Errors);
        assert!(Cli::try_parse_from(["paramdoc", "parse", "--section", "footer"]).is_err());
    }
}
