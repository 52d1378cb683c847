//! JSON report adapter.
//!
//! Writes one JSON object per line (NDJSON).

use crate::io::traits::{ReportEntry, ReportSink};
use crate::models::ProblemRecord;
use crate::{Error, Result};
use std::io::Write;

/// JSON report sink.
pub struct JsonReportSink<W: Write> {
    writer: W,
    /// Number of records written.
    count: usize,
}

impl<W: Write> JsonReportSink<W> {
    /// Creates a new JSON report sink.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

impl<W: Write> ReportSink for JsonReportSink<W> {
    fn write(&mut self, record: &ProblemRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &ReportEntry::from(record)).map_err(|e| {
            Error::OperationFailed {
                operation: "write_json_report".to_string(),
                cause: e.to_string(),
            }
        })?;
        writeln!(self.writer).map_err(|e| Error::OperationFailed {
            operation: "write_json_report".to_string(),
            cause: e.to_string(),
        })?;
        self.count += 1;
        Ok(())
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        tracing::trace!(records = self.count, "Finalizing JSON report");
        self.writer.flush().map_err(|e| Error::OperationFailed {
            operation: "flush_json_report".to_string(),
            cause: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProblemReason;
    use serde_json::Value;

    #[test]
    fn test_export_ndjson() {
        let mut output = Vec::new();
        {
            let mut sink = JsonReportSink::new(&mut output);
            sink.write(&ProblemRecord::new(2, "", ProblemReason::EmptyKey))
                .unwrap();
            sink.write(&ProblemRecord::new(5, "%%", ProblemReason::Unsanitizable))
                .unwrap();
            Box::new(sink).finalize().unwrap();
        }

        let output_str = String::from_utf8(output).unwrap();
        let values: Vec<Value> = output_str
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["line"], 2);
        assert_eq!(values[0]["severity"], "error");
        assert_eq!(values[1]["key"], "%%");
        assert_eq!(
            values[1]["reason"],
            "cannot be turned into a legal identifier"
        );
    }
}
