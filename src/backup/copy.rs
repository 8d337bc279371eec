//! Copy executor
//!
//! Copies a file's bytes, permissions and timestamps to its backup
//! location. The source is only ever read. Contents and timestamps are
//! copied in separate steps so a host can keep a backup whose timestamps
//! could not be carried over.

use std::fs::{self, File, FileTimes};
use std::path::Path;

use crate::error::{AutoBackupError, AutoBackupResult};

/// Copy the bytes and permissions of `source` to `destination`
///
/// The destination's parent directory must already exist. An existing
/// destination is overwritten.
pub fn copy_contents(source: &Path, destination: &Path) -> AutoBackupResult<u64> {
    fs::copy(source, destination).map_err(|e| AutoBackupError::copy(source, destination, e))
}

/// Give `destination` the access and modification times of `source`
pub fn copy_times(source: &Path, destination: &Path) -> AutoBackupResult<()> {
    let metadata = fs::metadata(source).map_err(|e| AutoBackupError::copy(source, destination, e))?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }

    // Permissions were copied with the contents and may forbid opening for write
    let file = File::options()
        .write(true)
        .open(destination)
        .or_else(|_| File::open(destination))
        .map_err(|e| AutoBackupError::copy(source, destination, e))?;
    file.set_times(times)
        .map_err(|e| AutoBackupError::copy(source, destination, e))
}

/// Confirm the backup file is present after copying
pub fn verify_backup(destination: &Path) -> AutoBackupResult<()> {
    if destination.is_file() {
        Ok(())
    } else {
        Err(AutoBackupError::Verification(destination.to_path_buf()))
    }
}
