//! # csvconst
//!
//! Generates source-code constants from the first column of a CSV file.
//!
//! Every raw key is sanitized into a legal identifier. The mapping back to the
//! original value is kept in the generated constant, and keys that could not be
//! used as-is are reported as problem records.
//!
//! ## Features
//!
//! - Deterministic key sanitization (`sanitize`)
//! - C# and Rust output (`rendering`)
//! - Problem reports as text, CSV or JSON (`io::report`)
//! - Overwrite-safe output planning (`services::output`)
//!
//! ## Example
//!
//! ```rust
//! use csvconst::sanitize::sanitize_identifier;
//!
//! let id = sanitize_identifier("foo bar").map(|id| id.to_string());
//! assert_eq!(id.as_deref(), Some("FOO_BAR"));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod io;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod sanitize;
pub mod services;

// Re-exports for convenience
pub use config::{CsvConstConfig, GeneratorSettings};
pub use models::{Constant, Identifier, ProblemReason, ProblemRecord, Severity};
pub use rendering::{ConstantsRenderer, Language};
pub use services::{GenerateRequest, GenerateResult, GeneratorService, OutputPlan};

/// Error type for csvconst operations.
///
/// Row-level conditions (empty keys, unsanitizable keys) are never errors; they
/// are reported as [`ProblemRecord`]s. This type covers process-level failures.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Unknown language or report format, empty delimiter |
/// | `OperationFailed` | I/O errors, config parse errors, logging init |
/// | `OutputExists` | Target file exists and overwrite was not forced |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The CSV file cannot be read or is not UTF-8
    /// - The generated file or the problem report cannot be written
    /// - The configuration file cannot be parsed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// The output file already exists.
    #[error("output file already exists: {} (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),
}

/// Result type alias for csvconst operations.
pub type Result<T> = std::result::Result<T, Error>;
