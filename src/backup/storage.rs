//! Backup storage implementation

use crate::error::{DedupError, Result};
use chrono::NaiveDateTime;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Inserted between the original filename and the timestamp
const BACKUP_SUFFIX: &str = ".backup.";

/// Timestamp layout embedded in backup filenames
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Sibling path for a backup taken at `taken_at`,
/// e.g. `site.conf.backup.20261018_093005`
pub fn backup_path_for(path: &Path, taken_at: &NaiveDateTime) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    name.push(taken_at.format(TIMESTAMP_FORMAT).to_string());
    PathBuf::from(name)
}

/// Highest `.N` suffix tried before giving up on a free backup name
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Create a new file at `base`, or at `base.1`, `base.2`, ... when taken.
/// Never opens an existing file.
fn create_unique(base: &Path) -> io::Result<(File, PathBuf)> {
    let mut candidate = base.to_path_buf();
    let mut attempt = 0;
    loop {
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => return Ok((file, candidate)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && attempt < MAX_NAME_ATTEMPTS => {
                attempt += 1;
                let mut name = base.as_os_str().to_owned();
                name.push(format!(".{}", attempt));
                candidate = PathBuf::from(name);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Copy `path` to a fresh timestamped backup and check the copy landed
///
/// An existing backup with the same name is left untouched; the new copy
/// gets a `.N` suffix instead.
///
/// # Returns
/// The backup path. Fails with `BackupFailed` before anything else
/// touches the original.
pub fn create_backup(path: &Path, taken_at: &NaiveDateTime) -> Result<PathBuf> {
    let failed = |reason: String| DedupError::BackupFailed {
        path: path.display().to_string(),
        reason,
    };

    let mut source = File::open(path).map_err(|e| failed(e.to_string()))?;
    let metadata = source.metadata().map_err(|e| failed(e.to_string()))?;

    let (mut target, backup) =
        create_unique(&backup_path_for(path, taken_at)).map_err(|e| failed(e.to_string()))?;
    let copied = io::copy(&mut source, &mut target)
        .and_then(|copied| target.sync_all().map(|_| copied))
        .map_err(|e| failed(format!("writing '{}': {}", backup.display(), e)))?;
    drop(target);
    fs::set_permissions(&backup, metadata.permissions())
        .map_err(|e| failed(format!("setting permissions on '{}': {}", backup.display(), e)))?;

    let original_len = metadata.len();
    let backup_len = fs::metadata(&backup)
        .map_err(|e| failed(format!("backup '{}' missing: {}", backup.display(), e)))?
        .len();
    if copied != original_len || backup_len != original_len {
        return Err(failed(format!(
            "backup '{}' has {} bytes, expected {}",
            backup.display(),
            backup_len,
            original_len
        )));
    }

    Ok(backup)
}
