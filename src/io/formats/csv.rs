//! CSV report adapter.
//!
//! Writes `line,key,severity,reason` with a header row. Keys are quoted as
//! needed, so reports round-trip through spreadsheet tools even when the
//! input could not.

use crate::io::traits::{ReportEntry, ReportSink};
use crate::models::ProblemRecord;
use crate::{Error, Result};
use std::io::Write;

/// CSV report sink.
pub struct CsvReportSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReportSink<W> {
    /// Creates a new CSV report sink.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(true)
                .from_writer(writer),
        }
    }
}

impl<W: Write> ReportSink for CsvReportSink<W> {
    fn write(&mut self, record: &ProblemRecord) -> Result<()> {
        self.writer
            .serialize(ReportEntry::from(record))
            .map_err(|e| Error::OperationFailed {
                operation: "write_csv_report".to_string(),
                cause: e.to_string(),
            })
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        self.writer.flush().map_err(|e| Error::OperationFailed {
            operation: "flush_csv_report".to_string(),
            cause: e.to_string(),
        })
    }
}
