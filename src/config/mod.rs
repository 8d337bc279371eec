//! Configuration module for AutoBackup
//!
//! This module provides configuration management including:
//! - Config directory and platform-suffixed settings file resolution
//! - User settings loading and persistence

pub mod paths;
pub mod settings;

pub use paths::AutoBackupPaths;
pub use settings::Settings;
