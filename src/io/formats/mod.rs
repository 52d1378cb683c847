//! Format adapters for problem reports.
//!
//! Each format implements the [`ReportSink`] trait.

pub mod csv;
pub mod json;
pub mod text;

use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use super::traits::ReportSink;

/// Supported problem report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Plain text, one problem per line.
    #[default]
    Text,
    /// CSV with a header row.
    Csv,
    /// Newline-delimited JSON objects.
    Json,
}

impl ReportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or not supported.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("txt" | "log") => Ok(Self::Text),
            Some("csv") => Ok(Self::Csv),
            Some("json" | "ndjson" | "jsonl") => Ok(Self::Json),
            Some(ext) => Err(Error::InvalidInput(format!(
                "Unsupported report extension: .{ext}"
            ))),
            None => Err(Error::InvalidInput(
                "Cannot determine report format: file has no extension".to_string(),
            )),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "json" | "ndjson" | "jsonl" => Ok(Self::Json),
            _ => Err(Error::InvalidInput(format!("Unknown report format: {s}"))),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Creates a report sink for the given format and writer.
pub fn create_report_sink<'a, W: Write + 'a>(
    writer: W,
    format: ReportFormat,
) -> Box<dyn ReportSink + 'a> {
    match format {
        ReportFormat::Text => Box::new(text::TextReportSink::new(writer)),
        ReportFormat::Csv => Box::new(csv::CsvReportSink::new(writer)),
        ReportFormat::Json => Box::new(json::JsonReportSink::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(ReportFormat::from_str("text").unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_str("CSV").unwrap(), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_str("jsonl").unwrap(), ReportFormat::Json);
        assert!(ReportFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ReportFormat::from_path(Path::new("Keys_ProblematicKeys.txt")).unwrap(),
            ReportFormat::Text
        );
        assert_eq!(
            ReportFormat::from_path(Path::new("problems.CSV")).unwrap(),
            ReportFormat::Csv
        );
        assert_eq!(
            ReportFormat::from_path(Path::new("problems.json")).unwrap(),
            ReportFormat::Json
        );
        assert!(ReportFormat::from_path(Path::new("problems.xml")).is_err());
        assert!(ReportFormat::from_path(Path::new("problems")).is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for format in [ReportFormat::Text, ReportFormat::Csv, ReportFormat::Json] {
            assert_eq!(ReportFormat::from_str(&format.to_string()).unwrap(), format);
            assert_eq!(
                ReportFormat::from_str(format.extension()).unwrap(),
                format
            );
        }
    }
}
