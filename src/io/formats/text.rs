//! Plain text report adapter.

use crate::io::traits::ReportSink;
use crate::models::ProblemRecord;
use crate::{Error, Result};
use std::io::Write;

/// Writes one `Display` line per problem record.
pub struct TextReportSink<W: Write> {
    writer: W,
}

impl<W: Write> TextReportSink<W> {
    /// Creates a new text sink.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportSink for TextReportSink<W> {
    fn write(&mut self, record: &ProblemRecord) -> Result<()> {
        writeln!(self.writer, "{record}").map_err(|e| Error::OperationFailed {
            operation: "write_text_report".to_string(),
            cause: e.to_string(),
        })
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        self.writer.flush().map_err(|e| Error::OperationFailed {
            operation: "flush_text_report".to_string(),
            cause: e.to_string(),
        })
    }
}
