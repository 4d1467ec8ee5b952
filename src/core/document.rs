//! Config file loading and writing

use crate::error::{DedupError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A config file held in memory for a single rewrite
#[derive(Debug)]
pub struct ConfigDocument {
    /// Path the text was read from
    path: PathBuf,
    /// Full file contents
    text: String,
}

impl ConfigDocument {
    /// Read the whole file into memory
    ///
    /// # Returns
    /// The loaded document, or `ReadFailed` if the file is missing,
    /// unreadable or not valid UTF-8
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| DedupError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Create a document from in-memory text (for testing)
    #[cfg(test)]
    pub fn from_text(path: &str, text: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            text: text.to_string(),
        }
    }

    /// Get the source path
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Split into lines, each keeping its own terminator
    pub fn lines(&self) -> Vec<&str> {
        self.text.split_inclusive('\n').collect()
    }
}

/// Replace the contents of `path` with `contents`
pub fn write_config_file(path: &Path, contents: &str, backup: &Path) -> Result<()> {
    fs::write(path, contents).map_err(|e| DedupError::WriteFailed {
        path: path.display().to_string(),
        backup: backup.display().to_string(),
        reason: e.to_string(),
    })
}
