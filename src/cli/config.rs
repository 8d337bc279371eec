//! Configuration commands
//!
//! `config` shows where settings are read from and what is in effect;
//! `init` writes a default settings file.

use crate::config::paths::{platform_name, AutoBackupPaths};
use crate::config::settings::Settings;
use crate::error::{AutoBackupError, AutoBackupResult};

/// Print the resolved paths and effective settings
pub fn handle_config_command(paths: &AutoBackupPaths, settings: &Settings) -> AutoBackupResult<()> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| AutoBackupError::Json(format!("Failed to serialize settings: {}", e)))?;

    println!("AutoBackup Configuration");
    println!("========================");
    println!("Platform:         {}", platform_name());
    println!("Config directory: {}", paths.base_dir().display());
    println!(
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not found, using defaults)" }
    );
    println!("Backup directory: {}", settings.resolved_backup_dir()?.display());
    println!();
    println!("Settings:");
    println!("{}", json);

    Ok(())
}

/// Write the default settings file unless one already exists
pub fn handle_init_command(paths: &AutoBackupPaths) -> AutoBackupResult<()> {
    let settings_file = paths.settings_file();

    if paths.is_initialized() {
        println!("Settings already exist at: {}", settings_file.display());
        return Ok(());
    }

    Settings::default().save(paths)?;
    println!("Created settings file: {}", settings_file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AutoBackupPaths::with_base_dir(temp_dir.path().join("cfg"));

        handle_init_command(&paths).unwrap();
        assert!(paths.is_initialized());

        let custom = Settings {
            backup_dir: "/tmp/custom".into(),
            ..Settings::default()
        };
        custom.save(&paths).unwrap();

        // A second init must not clobber the user's edits
        handle_init_command(&paths).unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.backup_dir, "/tmp/custom");
    }

    #[test]
    fn test_config_command_without_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AutoBackupPaths::with_base_dir(temp_dir.path().to_path_buf());

        handle_config_command(&paths, &Settings::default()).unwrap();
    }
}
