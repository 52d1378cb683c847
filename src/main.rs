//! Binary entry point for csvconst.
//!
//! This binary provides the CLI interface for the constants generator.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use commands::{CheckArgs, GenerateArgs};
use csvconst::config::{CONFIG_PATH_ENV, CsvConstConfig};
use csvconst::observability::{self, InitOptions};
use std::path::PathBuf;
use std::process::ExitCode;

/// csvconst - Generates source-code constants from the keys of a CSV file.
#[derive(Parser)]
#[command(name = "csvconst")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Generate a constants file from a CSV file.
    Generate(GenerateArgs),

    /// List problem keys without writing anything.
    Check(CheckArgs),

    /// Manage configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match CsvConstConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_config(
        &config.logging,
        InitOptions {
            verbose: cli.verbose,
        },
    ) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(
    command: Commands,
    config: CsvConstConfig,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Generate(args) => commands::cmd_generate(&config, args),

        Commands::Check(args) => commands::cmd_check(&config, args),

        Commands::Config { show } => {
            commands::cmd_config(&config, show);
            Ok(ExitCode::SUCCESS)
        },
    }
}
