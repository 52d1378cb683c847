//! Core traits for problem report output.
//!
//! Defines the [`ReportSink`] trait that format adapters implement.

use crate::Result;
use crate::models::ProblemRecord;
use serde::Serialize;

/// Flat representation of a problem record for structured formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// 1-based physical line.
    pub line: usize,
    /// The trimmed raw key.
    pub key: String,
    /// `warning` or `error`.
    pub severity: &'static str,
    /// Human-readable reason.
    pub reason: String,
}

impl From<&ProblemRecord> for ReportEntry {
    fn from(record: &ProblemRecord) -> Self {
        Self {
            line: record.line,
            key: record.key.clone(),
            severity: record.severity().as_str(),
            reason: record.reason.to_string(),
        }
    }
}

/// Sink for problem records.
///
/// # Lifecycle
///
/// 1. Create sink with output destination
/// 2. Call `write()` for each record
/// 3. Call `finalize()` to flush
pub trait ReportSink {
    /// Writes a single record to the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or I/O fails.
    fn write(&mut self, record: &ProblemRecord) -> Result<()>;

    /// Finalizes the report, flushing buffers.
    ///
    /// This method consumes the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if I/O fails.
    fn finalize(self: Box<Self>) -> Result<()>;
}
