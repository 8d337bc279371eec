//! Backup system for AutoBackup
//!
//! Copies a file into a timestamped location under the backup root whenever
//! an editor trigger fires and the file qualifies.
//!
//! # Architecture
//!
//! - `eligibility`: decides whether a document may be backed up
//! - `destination`: computes the backup path and creates its directories
//! - `copy`: copies bytes and metadata, then checks the result exists
//! - `engine`: `BackupEngine`, the trigger entry points tying it together
//!
//! # Backup Layout
//!
//! ```text
//! <backup_dir>/
//!   2024-03-01/               (backup_path_dir_date)
//!     notes.txt/              (backup_path_dir_filename)
//!       notes.txt.[2024-03-01_10.00.00].bak
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use autobackup::backup::BackupEngine;
//! use autobackup::config::{AutoBackupPaths, Settings};
//! use autobackup::document::FileDocument;
//! use autobackup::logging::TracingSink;
//!
//! let paths = AutoBackupPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let engine = BackupEngine::new(&settings, &TracingSink);
//!
//! let doc = FileDocument::from_path("notes.txt")?;
//! engine.on_post_save(&doc);
//! ```

mod copy;
mod destination;
mod eligibility;
mod engine;

pub use copy::{copy_contents, copy_times, verify_backup};
pub use destination::{backup_file_name, BackupTarget, DATE_DIR_FORMAT, TIMESTAMP_FORMAT};
pub use eligibility::{check_eligibility, Eligibility, Rejection};
pub use engine::{BackupEngine, BackupOutcome};
