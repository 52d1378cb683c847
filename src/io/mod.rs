//! Input and report I/O.
//!
//! Reads CSV key columns and writes problem reports.
//!
//! # Architecture
//!
//! - [`KeySource`] yields `(line, raw key)` rows from CSV text
//! - **Format adapters** implement [`ReportSink`] for each report format
//! - [`report`] ties sinks to files and default report names
//!
//! # Supported Report Formats
//!
//! | Format | Extension | Notes |
//! |--------|-----------|-------|
//! | Text | `.txt` | One line per problem |
//! | CSV | `.csv` | `line,key,severity,reason` |
//! | JSON | `.json` | Newline-delimited objects |
//!
//! # Examples
//!
//! ```rust
//! use csvconst::io::KeySource;
//!
//! let rows: Vec<_> = KeySource::new("Key,Value\nhello,1\n", ',').collect();
//! assert_eq!(rows[0].line, 2);
//! assert_eq!(rows[0].raw, "hello");
//! ```

pub mod formats;
pub mod report;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use formats::ReportFormat;
pub use report::{default_report_path, export_report, write_report};
pub use source::{KeyRow, KeySource, parse_delimiter, read_text};
pub use traits::{ReportEntry, ReportSink};
