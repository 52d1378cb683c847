//! Problem report export.

use super::formats::{ReportFormat, create_report_sink};
use crate::models::ProblemRecord;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the CSV file stem for the default report name.
pub const REPORT_SUFFIX: &str = "_ProblematicKeys";

/// Writes all records to `writer` in `format`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report<W: Write>(
    writer: W,
    records: &[ProblemRecord],
    format: ReportFormat,
) -> Result<()> {
    let mut sink = create_report_sink(writer, format);
    for record in records {
        sink.write(record)?;
    }
    sink.finalize()
}

/// Exports records to a file.
///
/// The format is taken from `format` or, if `None`, from the file extension.
/// An empty record list writes nothing and returns `Ok(false)`.
///
/// # Errors
///
/// Returns an error if the format cannot be determined or the file cannot be
/// written.
pub fn export_report(
    path: &Path,
    records: &[ProblemRecord],
    format: Option<ReportFormat>,
) -> Result<bool> {
    if records.is_empty() {
        tracing::info!(path = %path.display(), "No problem keys to export");
        return Ok(false);
    }

    let format = match format {
        Some(format) => format,
        None => ReportFormat::from_path(path)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::OperationFailed {
            operation: "create_report_dir".to_string(),
            cause: format!("{}: {e}", parent.display()),
        })?;
    }

    let file = File::create(path).map_err(|e| Error::OperationFailed {
        operation: "create_report".to_string(),
        cause: format!("{}: {e}", path.display()),
    })?;
    write_report(BufWriter::new(file), records, format)?;

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        %format,
        "Exported problem keys"
    );
    Ok(true)
}

/// Returns `<dir>/<csv stem>_ProblematicKeys.<ext>`.
///
/// `dir` defaults to the CSV file's directory.
#[must_use]
pub fn default_report_path(csv_path: &Path, dir: Option<&Path>, format: ReportFormat) -> PathBuf {
    let stem = csv_path
        .file_stem()
        .map_or_else(|| "Keys".into(), |s| s.to_string_lossy());
    let file_name = format!("{stem}{REPORT_SUFFIX}.{}", format.extension());
    let dir = dir.or_else(|| csv_path.parent()).unwrap_or_else(|| Path::new(""));
    dir.join(file_name)
}
