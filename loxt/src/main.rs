//! Loxt CLI - command-line front end for the Lox scanner.
//!
//! Parses arguments with clap, loads `loxt.toml`, installs logging and
//! dispatches to the selected subcommand.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    common::OutputFormat,
    scan::{run_scan, ScanArgs},
};
use config::Config;
use error::{LoxtError, Result};

/// Loxt - tools for Lox source files
///
/// Loxt scans Lox programs into tokens, either printing them or just
/// reporting whether each file is lexically valid.
#[derive(Parser, Debug)]
#[command(name = "loxt")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for Lox source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the loxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of Lox source files
    ///
    /// Each file is scanned in turn; the first lexical error stops the run.
    Scan(ScanCommand),

    /// Report whether Lox source files scan cleanly
    ///
    /// Prints one line per file and exits with a failure status when any
    /// file has a lexical error.
    Check(CheckCommand),
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommand {
    /// Input files (`-` reads standard input)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Keywords must end at an identifier boundary
    #[arg(long)]
    strict_keywords: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files (`-` reads standard input)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Keywords must end at an identifier boundary
    #[arg(long)]
    strict_keywords: bool,
}

/// Main entry point for the loxt CLI.
///
/// Errors are printed to stderr and turned into a failure exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Load configuration, initialize logging and execute the command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;
    tracing::debug!(
        format = %config.scan.format,
        strict_keywords = config.scan.strict_keywords,
        "configuration loaded"
    );

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token listings on stdout stay machine readable.
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
        .map_err(|e| LoxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Scan(args) => execute_scan(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the scan command.
fn execute_scan(args: ScanCommand, verbose: bool, config: Config) -> Result<()> {
    let format = args.format.as_deref().unwrap_or(&config.scan.format);
    let scan_args = ScanArgs {
        verbose,
        input: args.input,
        format: OutputFormat::parse(format)?,
        strict_keywords: args.strict_keywords || config.scan.strict_keywords,
    };
    run_scan(scan_args).map(|_| ())
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        input: args.input,
        strict_keywords: args.strict_keywords || config.scan.strict_keywords,
    };
    run_check(check_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::parse_from(["loxt", "scan", "main.lox"]);
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.input, vec![PathBuf::from("main.lox")]);
            assert_eq!(args.format, None);
            assert!(!args.strict_keywords);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_with_format() {
        let cli = Cli::parse_from(["loxt", "scan", "a.lox", "b.lox", "--format", "json"]);
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.input.len(), 2);
            assert_eq!(args.format, Some("json".to_string()));
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_stdin() {
        let cli = Cli::parse_from(["loxt", "scan", "-"]);
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.input, vec![PathBuf::from("-")]);
        } else {
            panic!("Expected Scan command");
        }
    }

    #[test]
    fn test_cli_parse_scan_requires_input() {
        assert!(Cli::try_parse_from(["loxt", "scan"]).is_err());
    }

    #[test]
    fn test_cli_parse_check_strict() {
        let cli = Cli::parse_from(["loxt", "check", "--strict-keywords", "main.lox"]);
        if let Commands::Check(args) = cli.command {
            assert!(args.strict_keywords);
            assert_eq!(args.input, vec![PathBuf::from("main.lox")]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "loxt",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/loxt.toml",
            "check",
            "main.lox",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/loxt.toml")));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let args = ScanCommand {
            input: vec![PathBuf::from("main.lox")],
            format: Some("yaml".to_string()),
            strict_keywords: false,
        };
        let err = execute_scan(args, false, Config::default()).unwrap_err();
        assert!(matches!(err, LoxtError::Validation(_)));
    }
}
