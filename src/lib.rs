//! AutoBackup - timestamped file backups driven by editor events
//!
//! Whenever an editor opens or saves a file, AutoBackup can copy the file's
//! on-disk contents into a backup tree, named after the file and the moment
//! the backup was taken.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file location and typed settings
//! - `error`: Custom error types
//! - `document`: The `Document` handle hosts pass in
//! - `logging`: Pluggable log sinks and `tracing` setup
//! - `backup`: Eligibility check, destination paths, copying, and the engine
//! - `cli`: Command handlers for the `autobackup` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use autobackup::backup::BackupEngine;
//! use autobackup::config::{AutoBackupPaths, Settings};
//! use autobackup::logging::TracingSink;
//!
//! let paths = AutoBackupPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let engine = BackupEngine::new(&settings, &TracingSink);
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;

pub use error::AutoBackupError;
