//! Output file planning and writing.

use crate::rendering::Language;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Where a generated file goes: `<out_dir>/<csv stem><suffix>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    path: PathBuf,
}

impl OutputPlan {
    /// Plans the output path for `csv_path`.
    #[must_use]
    pub fn new(csv_path: &Path, out_dir: &Path, suffix: &str, language: Language) -> Self {
        let stem = csv_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!("{stem}{suffix}.{}", language.extension());
        Self {
            path: out_dir.join(file_name),
        }
    }

    /// Returns the planned path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns whether a file already exists at the planned path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes `content`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutputExists`] if the file exists and `force` is not
    /// set, or an I/O error.
    pub fn write(&self, content: &str, force: bool) -> Result<()> {
        if self.exists() && !force {
            return Err(Error::OutputExists(self.path.clone()));
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::OperationFailed {
                operation: "create_output_dir".to_string(),
                cause: format!("{}: {e}", parent.display()),
            })?;
        }

        std::fs::write(&self.path, content).map_err(|e| Error::OperationFailed {
            operation: "write_output".to_string(),
            cause: format!("{}: {e}", self.path.display()),
        })?;

        tracing::info!(path = %self.path.display(), bytes = content.len(), "Wrote generated file");
        Ok(())
    }
}
