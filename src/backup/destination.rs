//! Backup destination paths
//!
//! A backup lands at
//! `<backup_dir>[/<YYYY-MM-DD>][/<file name>]/<file name>.[YYYY-MM-DD_HH.MM.SS].bak`.
//! Building the path is pure; creating the directory chain is a separate
//! step so nothing touches the disk until a backup is actually taken.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::Settings;
use crate::error::{AutoBackupError, AutoBackupResult};

/// Format of the optional date directory
pub const DATE_DIR_FORMAT: &str = "%Y-%m-%d";

/// Format of the timestamp marker inside backup file names
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H.%M.%S";

/// Where a single backup will be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupTarget {
    directory: PathBuf,
    file_name: OsString,
}

impl BackupTarget {
    /// Compute the destination for backing up `source` at `now`
    pub fn build(source: &Path, settings: &Settings, now: NaiveDateTime) -> AutoBackupResult<Self> {
        let base_name = source.file_name().ok_or_else(|| {
            AutoBackupError::Config(format!("No file name in path: {}", source.display()))
        })?;

        let mut directory = settings.resolved_backup_dir()?;

        if settings.backup_path_dir_date {
            directory.push(now.format(DATE_DIR_FORMAT).to_string());
        }

        if settings.backup_path_dir_filename {
            directory.push(base_name);
        }

        Ok(Self {
            directory,
            file_name: backup_file_name(base_name, now),
        })
    }

    /// Directory the backup file goes into
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Name of the backup file
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Full path of the backup file
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Create every missing directory up to the backup directory
    pub fn ensure_directory(&self) -> AutoBackupResult<()> {
        fs::create_dir_all(&self.directory).map_err(|e| {
            AutoBackupError::Io(format!(
                "Failed to create backup directory {}: {}",
                self.directory.display(),
                e
            ))
        })
    }
}

/// `<name>.[YYYY-MM-DD_HH.MM.SS].bak`
///
/// The name is kept as raw OS bytes so distinct non-UTF-8 names never
/// collapse onto the same backup.
pub fn backup_file_name(base_name: &OsStr, now: NaiveDateTime) -> OsString {
    let mut name = base_name.to_os_string();
    name.push(".[");
    name.push(now.format(TIMESTAMP_FORMAT).to_string());
    name.push("].bak");
    name
}
