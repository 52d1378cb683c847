//! Command handlers module.
//!
//! This module organizes the CLI command implementations into separate files:
//! - `generate.rs`: Generate a constants file and export problem keys
//! - `check.rs`: Report problem keys only
//! - `config.rs`: Configuration display command

mod check;
mod config;
mod generate;

use std::path::PathBuf;

use clap::Args;
use csvconst::Result;
use csvconst::io::parse_delimiter;

// Re-export command functions
pub use check::cmd_check;
pub use config::cmd_config;
pub use generate::cmd_generate;

/// Arguments for `generate`.
#[derive(Args)]
pub struct GenerateArgs {
    /// CSV file whose first column holds the keys.
    pub csv: PathBuf,

    /// Output directory.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Appended to the CSV file name for the output file and class name.
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Output language: csharp or rust.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Column delimiter (a single character, or "tab").
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Overwrite an existing output file.
    #[arg(long)]
    pub force: bool,

    /// Print the generated source instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Export problem keys to this file (format from the extension).
    #[arg(long, conflicts_with = "export_problems")]
    pub problems: Option<PathBuf>,

    /// Export problem keys next to the CSV file.
    #[arg(long)]
    pub export_problems: bool,
}

/// Arguments for `check`.
#[derive(Args)]
pub struct CheckArgs {
    /// CSV file whose first column holds the keys.
    pub csv: PathBuf,

    /// Column delimiter (a single character, or "tab").
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

/// Resolves the delimiter flag against the configured default.
fn resolve_delimiter(flag: Option<&str>, default: char) -> Result<char> {
    flag.map_or(Ok(default), parse_delimiter)
}
