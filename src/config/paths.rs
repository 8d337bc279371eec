//! Path management for AutoBackup
//!
//! Locates the configuration directory and the platform-suffixed settings
//! file inside it.
//!
//! ## Path Resolution Order
//!
//! 1. `AUTOBACKUP_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory joined with `autobackup`
//!    (`~/.config/autobackup`, `~/Library/Application Support/autobackup`,
//!    `%APPDATA%\autobackup`)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::AutoBackupError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "AUTOBACKUP_CONFIG_DIR";

/// Manages all paths used by AutoBackup
#[derive(Debug, Clone)]
pub struct AutoBackupPaths {
    /// Directory holding the settings files
    base_dir: PathBuf,
}

impl AutoBackupPaths {
    /// Create a new AutoBackupPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AutoBackupError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AutoBackupPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the configuration directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file for the running platform
    pub fn settings_file(&self) -> PathBuf {
        self.settings_file_for(&platform_name())
    }

    /// Get the path to the settings file for a named platform
    pub fn settings_file_for(&self, platform: &str) -> PathBuf {
        self.base_dir.join(format!("AutoBackup ({}).json", platform))
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), AutoBackupError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            AutoBackupError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    /// Check if a settings file exists for the running platform
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Display name of the running platform, used to suffix the settings file
///
/// `macos` is spelled `OSX`; every other OS identifier is title-cased.
pub fn platform_name() -> String {
    platform_display_name(std::env::consts::OS)
}

fn platform_display_name(os: &str) -> String {
    match os {
        "macos" => "OSX".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn resolve_default_path() -> Result<PathBuf, AutoBackupError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| AutoBackupError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("autobackup"))
}
