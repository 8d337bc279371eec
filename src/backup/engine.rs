//! Backup engine
//!
//! The four trigger entry points a host calls, and the linear pipeline
//! behind them: eligibility check, destination, copy, log.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::Level;

use super::copy::{copy_contents, copy_times, verify_backup};
use super::destination::BackupTarget;
use super::eligibility::{check_eligibility, Eligibility, Rejection};
use crate::config::Settings;
use crate::document::Document;
use crate::error::AutoBackupError;
use crate::logging::{LogSink, LOG_TAG};

/// What happened to a single trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// The trigger is switched off, or a pre-save fired for a clean buffer
    Disabled,
    /// The document was not eligible
    Skipped(Rejection),
    /// The backup was written to this path
    Saved(PathBuf),
    /// Creating the backup failed
    Failed {
        destination: Option<PathBuf>,
        reason: String,
    },
}

impl BackupOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    /// Path of the written backup, if any
    pub fn saved_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Saved(path) => Some(path),
            _ => None,
        }
    }
}

/// Runs backups for a host
///
/// Borrows the settings loaded at startup and the sink every outcome is
/// reported to. Nothing here returns an error: failures become log lines.
pub struct BackupEngine<'a> {
    settings: &'a Settings,
    sink: &'a dyn LogSink,
}

impl<'a> BackupEngine<'a> {
    pub fn new(settings: &'a Settings, sink: &'a dyn LogSink) -> Self {
        Self { settings, sink }
    }

    /// A file was opened
    pub fn on_load(&self, document: &dyn Document) -> BackupOutcome {
        if !self.settings.backup_on_load() {
            return BackupOutcome::Disabled;
        }
        self.run_backup(document)
    }

    /// A file is about to be saved; only dirty buffers are backed up
    pub fn on_pre_save(&self, document: &dyn Document) -> BackupOutcome {
        if !self.settings.backup_on_pre_save || !document.is_dirty() {
            return BackupOutcome::Disabled;
        }
        self.run_backup(document)
    }

    /// A file has just been saved
    pub fn on_post_save(&self, document: &dyn Document) -> BackupOutcome {
        if !self.settings.backup_on_post_save {
            return BackupOutcome::Disabled;
        }
        self.run_backup(document)
    }

    /// Manual trigger; ignores the event flags
    pub fn run_backup(&self, document: &dyn Document) -> BackupOutcome {
        self.backup_at(document, Local::now().naive_local())
    }

    /// Back up `document` using `now` for the date directory and file name
    pub fn backup_at(&self, document: &dyn Document, now: NaiveDateTime) -> BackupOutcome {
        if let Eligibility::Rejected(rejection) = check_eligibility(document, self.settings) {
            let level = if rejection.is_misconfiguration() {
                Level::WARN
            } else {
                Level::INFO
            };
            self.emit(level, &rejection.to_string());
            return BackupOutcome::Skipped(rejection);
        }

        let Some(source) = document.file_path() else {
            self.emit(Level::INFO, &Rejection::NoFileName.to_string());
            return BackupOutcome::Skipped(Rejection::NoFileName);
        };

        let target = match BackupTarget::build(source, self.settings, now) {
            Ok(target) => target,
            Err(e) => return self.failed(None, e),
        };
        let destination = target.path();

        let copied = target
            .ensure_directory()
            .and_then(|_| copy_contents(source, &destination));
        if let Err(e) = copied {
            return self.failed(Some(destination), e);
        }

        // The backup stands on its contents; lost timestamps are only a warning
        if let Err(e) = copy_times(source, &destination) {
            self.emit(
                Level::WARN,
                &format!("Backup timestamps not preserved @ {} ({})", destination.display(), e),
            );
        }

        match verify_backup(&destination) {
            Ok(()) => {
                self.emit(
                    Level::INFO,
                    &format!("Backup saved @ {}", destination.display()),
                );
                BackupOutcome::Saved(destination)
            }
            Err(e) => self.failed(Some(destination), e),
        }
    }

    fn failed(&self, destination: Option<PathBuf>, err: AutoBackupError) -> BackupOutcome {
        let reason = err.to_string();
        match &destination {
            Some(path) => self.emit(
                Level::ERROR,
                &format!("Backup FAILED @ {} ({})", path.display(), reason),
            ),
            None => self.emit(Level::ERROR, &format!("Backup FAILED ({})", reason)),
        }
        BackupOutcome::Failed {
            destination,
            reason,
        }
    }

    fn emit(&self, level: Level, message: &str) {
        self.sink.log(level, &format!("{} {}", LOG_TAG, message));
    }
}
