//! Backup Snapshot - Timestamped Copies of Backing Files
//!
//! Copies each existing data file to `<file>_<YYYYMMDD_HHMMSS>.bak`
//! beside it before state gets reset. Snapshots accumulate; nothing is
//! rotated or pruned.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{info, instrument};

use crate::ports::{Result, StoreError};

/// Timestamp layout embedded in backup file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Backup path for `file` taken at `at`.
pub fn backup_path(file: &Path, at: NaiveDateTime) -> PathBuf {
    let mut name = file.file_name().unwrap_or_default().to_os_string();
    name.push(format!("_{}.bak", at.format(TIMESTAMP_FORMAT)));
    file.with_file_name(name)
}

/// Copy every existing file in `files` to its timestamped backup path.
///
/// Missing files are skipped. Returns the backup paths written, in the
/// order of `files`. A second snapshot within the same second overwrites
/// the first.
#[instrument(skip(files))]
pub fn snapshot<P: AsRef<Path>>(files: &[P], at: NaiveDateTime) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let file = file.as_ref();
        if !file.exists() {
            continue;
        }
        let target = backup_path(file, at);
        fs::copy(file, &target).map_err(|e| StoreError::io(&target, e))?;
        written.push(target);
    }

    info!(count = written.len(), "Backup snapshot taken");
    Ok(written)
}

/// [`snapshot`] stamped with the current local time.
pub fn snapshot_now<P: AsRef<Path>>(files: &[P]) -> Result<Vec<PathBuf>> {
    snapshot(files, chrono::Local::now().naive_local())
}
