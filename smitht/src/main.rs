//! Smitht CLI - A command-line driver for the Smith lexer.
//!
//! This is the main entry point for the smitht CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handler based on user input.

mod commands;
mod config;
mod error;
mod report;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::traits::Command;
use commands::{CheckArgs, CheckCommand, LexArgs, LexCommand};
use config::Config;
use error::{Result, SmithtError};

/// Smitht - A CLI tool for the Smith lexer
///
/// Smitht tokenizes Smith source files and runs token-level test suites
/// against the lexer.
#[derive(Parser, Debug)]
#[command(name = "smitht")]
#[command(author = "Smith Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for the Smith lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SMITHT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SMITHT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SMITHT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the smitht CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a source file
    ///
    /// Prints every token with its kind, text and span. Reads stdin when no
    /// file is given.
    Lex(LexCommandArgs),

    /// Run lexer unit tests
    ///
    /// Runs the cases from the given `.toml` or `.json` files, or the
    /// built-in suite, and reports mismatches.
    Check(CheckCommandArgs),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommandArgs {
    /// Source file to tokenize (`-` or omitted for stdin)
    input: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Treat invalid characters as errors and exit non-zero
    #[arg(long)]
    deny_invalid: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Test case files (.toml or .json); the built-in suite when omitted
    cases: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// List matching cases as well as mismatches
    #[arg(long)]
    show_passing: bool,
}

/// Main entry point for the smitht CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    // Execute the selected command
    execute_command(cli.command, config)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so that command output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SmithtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> anyhow::Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommandArgs, config: Config) -> anyhow::Result<()> {
    let lex_args = LexArgs {
        input: args.input,
        format: args.format.unwrap_or(config.lex.format),
        deny_invalid: args.deny_invalid || config.lex.deny_invalid,
    };
    LexCommand::new(lex_args)
        .execute()
        .with_context(|| format!("{} failed", LexCommand::name()))
}

/// Execute the check command.
fn execute_check(args: CheckCommandArgs, config: Config) -> anyhow::Result<()> {
    let check_args = CheckArgs {
        cases: args.cases,
        format: args.format.unwrap_or(config.check.format),
        show_passing: args.show_passing || config.check.show_passing,
    };
    CheckCommand::new(check_args)
        .execute()
        .with_context(|| format!("{} failed", CheckCommand::name()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex_stdin() {
        let cli = Cli::parse_from(["smitht", "lex"]);
        if let Commands::Lex(args) = cli.command {
            assert!(args.input.is_none());
            assert!(args.format.is_none());
            assert!(!args.deny_invalid);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_file() {
        let cli = Cli::parse_from(["smitht", "lex", "main.smith"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("main.smith")));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_format() {
        let cli = Cli::parse_from(["smitht", "lex", "-F", "json", "--deny-invalid"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert!(args.deny_invalid);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["smitht", "lex", "--format", "html"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["smitht", "check"]);
        if let Commands::Check(args) = cli.command {
            assert!(args.cases.is_empty());
            assert!(!args.show_passing);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_with_cases() {
        let cli = Cli::parse_from(["smitht", "check", "a.toml", "b.json", "--show-passing"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(
                args.cases,
                vec![PathBuf::from("a.toml"), PathBuf::from("b.json")]
            );
            assert!(args.show_passing);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["smitht", "--verbose", "check"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["smitht", "--config", "/path/to/smitht.toml", "lex"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/smitht.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["smitht", "lex", "--no-color"]);
        assert!(cli.no_color);
    }
}
