//! # GST CLI Library
//!
//! Core library for the `gst` command-line application.
//! This is the main entry point that parses arguments and runs commands.
//!
//! ## Module Organization
//! ```text
//! gst_cli/
//! ├── lib.rs          ◄─── You are here (argument parsing & run)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── calculate.rs◄─── forward / reverse
//! │   ├── rates.rs    ◄─── Rate table
//! │   └── config.rs   ◄─── Effective configuration
//! ├── config.rs       ◄─── ConfigState from GST_* variables
//! ├── input.rs        ◄─── Raw text → numbers (or a notice)
//! ├── output.rs       ◄─── Text / JSON rendering
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::calculate::{ForwardArgs, ReverseArgs};
use config::{ConfigState, OutputFormat};
use error::ApiError;
use gst_core::GstCalculator;
use output::{render_error, Response};

/// India GST calculator: add GST to a price, or extract it from a total.
#[derive(Debug, Parser)]
#[command(name = "gst", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print results as JSON (overrides GST_OUTPUT)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add GST to a base price
    Forward(ForwardArgs),
    /// Extract GST from a tax-inclusive total
    Reverse(ReverseArgs),
    /// Show the GST rate categories
    Rates,
    /// Show the effective configuration
    Config,
}

/// Runs the CLI.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr)
/// 2. Parse arguments
/// 3. Load configuration from the environment
/// 4. Execute the command with a fresh calculator
/// 5. Print the result to stdout, or the error to stderr
pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "Starting gst");

    let config = match ConfigState::from_env() {
        Ok(config) => config,
        Err(err) => {
            let format = if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            return fail(&ApiError::from(err), format);
        }
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let calculator = GstCalculator::new();
    match execute(&cli.command, &calculator, &config).and_then(|response| response.render(format))
    {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err, format),
    }
}

/// Dispatches a parsed command.
///
/// Pure apart from logging, so commands can be exercised without a process.
pub fn execute(
    command: &Command,
    calculator: &GstCalculator,
    config: &ConfigState,
) -> Result<Response, ApiError> {
    match command {
        Command::Forward(args) => {
            commands::calculate::forward(calculator, config, args).map(Response::Forward)
        }
        Command::Reverse(args) => {
            commands::calculate::reverse(calculator, config, args).map(Response::Reverse)
        }
        Command::Rates => Ok(Response::Rates(commands::rates::get_rates(calculator))),
        Command::Config => Ok(Response::Config(commands::config::get_config(config))),
    }
}

fn fail(err: &ApiError, format: OutputFormat) -> ExitCode {
    debug!(code = ?err.code, "command failed: {}", err.message);
    eprintln!("{}", render_error(err, format));
    ExitCode::FAILURE
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN, so normal output stays clean
/// - `RUST_LOG=gst_cli=debug` - Show each command and calculation
///
/// Logs go to stderr; stdout carries only results.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
