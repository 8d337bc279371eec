//! User settings for AutoBackup
//!
//! Which editor events trigger a backup, the size limit, and how the backup
//! directory tree is laid out. Settings are loaded once at startup and lent
//! to the engine by reference.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::AutoBackupPaths;
use crate::error::AutoBackupError;

/// User settings for AutoBackup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Back up the on-disk file before a dirty buffer is saved
    #[serde(default)]
    pub backup_on_pre_save: bool,

    /// Back up the file after it has been saved
    #[serde(default)]
    pub backup_on_post_save: bool,

    /// Back up the file when it is opened
    ///
    /// When unset, opening a file follows `backup_on_post_save`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_on_load: Option<bool>,

    /// Largest file (in bytes) that will be backed up
    ///
    /// A missing value is a misconfiguration and blocks every backup.
    #[serde(default)]
    pub max_backup_file_size_bytes: Option<u64>,

    /// Root of the backup tree; `~` expands to the home directory
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// Add a `YYYY-MM-DD` directory under the backup root
    #[serde(default)]
    pub backup_path_dir_date: bool,

    /// Add a directory named after the backed-up file
    #[serde(default)]
    pub backup_path_dir_filename: bool,
}

fn default_backup_dir() -> String {
    "~/.autobackup".to_string()
}

fn default_max_backup_file_size() -> u64 {
    256 * 1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backup_on_pre_save: true,
            backup_on_post_save: true,
            backup_on_load: None,
            max_backup_file_size_bytes: Some(default_max_backup_file_size()),
            backup_dir: default_backup_dir(),
            backup_path_dir_date: true,
            backup_path_dir_filename: true,
        }
    }
}

impl Settings {
    /// Whether opening a file triggers a backup
    pub fn backup_on_load(&self) -> bool {
        self.backup_on_load.unwrap_or(self.backup_on_post_save)
    }

    /// The backup root with `~` expanded, made absolute against the
    /// current directory when relative
    pub fn resolved_backup_dir(&self) -> Result<PathBuf, AutoBackupError> {
        let expanded = PathBuf::from(shellexpand::tilde(&self.backup_dir).into_owned());
        if expanded.is_absolute() {
            return Ok(expanded);
        }

        let cwd = std::env::current_dir().map_err(|e| {
            AutoBackupError::Io(format!("Failed to resolve backup directory: {}", e))
        })?;
        Ok(cwd.join(expanded))
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &AutoBackupPaths) -> Result<Self, AutoBackupError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AutoBackupError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AutoBackupError::Config(format!(
                    "Failed to parse settings file {}: {}",
                    settings_path.display(),
                    e
                ))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AutoBackupPaths) -> Result<(), AutoBackupError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AutoBackupError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            AutoBackupError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.backup_on_pre_save);
        assert!(settings.backup_on_post_save);
        assert!(settings.backup_on_load());
        assert_eq!(settings.max_backup_file_size_bytes, Some(262_144));
        assert_eq!(settings.backup_dir, "~/.autobackup");
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AutoBackupPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AutoBackupPaths::with_base_dir(temp_dir.path().join("cfg"));

        let settings = Settings {
            backup_on_pre_save: false,
            backup_dir: "/tmp/bak".into(),
            backup_path_dir_date: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_max_size_is_none() {
        let settings: Settings =
            serde_json::from_str(r#"{"backup_dir": "/tmp/bak", "backup_on_post_save": true}"#)
                .unwrap();

        assert_eq!(settings.max_backup_file_size_bytes, None);
        assert!(settings.backup_on_post_save);
        assert!(!settings.backup_on_pre_save);
    }

    #[test]
    fn test_load_follows_post_save_when_unset() {
        let mut settings = Settings {
            backup_on_post_save: false,
            ..Settings::default()
        };
        assert!(!settings.backup_on_load());

        settings.backup_on_load = Some(true);
        assert!(settings.backup_on_load());
    }

    #[test]
    fn test_invalid_settings_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AutoBackupPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_resolved_backup_dir_expands_home() {
        let settings = Settings::default();
        let resolved = settings.resolved_backup_dir().unwrap();

        assert!(!resolved.to_string_lossy().starts_with('~'));
        assert!(resolved.ends_with(".autobackup"));

        let absolute = Settings {
            backup_dir: "/tmp/bak".into(),
            ..Settings::default()
        };
        assert_eq!(absolute.resolved_backup_dir().unwrap(), PathBuf::from("/tmp/bak"));
    }

    #[test]
    fn test_relative_backup_dir_resolves_against_cwd() {
        let settings = Settings {
            backup_dir: "backups/here".into(),
            ..Settings::default()
        };

        let resolved = settings.resolved_backup_dir().unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, std::env::current_dir().unwrap().join("backups/here"));
    }
}
