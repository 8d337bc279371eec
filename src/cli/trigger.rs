//! Trigger commands
//!
//! Lets a shell or an editor hook fire the same triggers an editor plugin
//! would, for a file on disk.

use std::path::PathBuf;

use clap::Args;

use crate::backup::{BackupEngine, BackupOutcome};
use crate::config::Settings;
use crate::document::FileDocument;
use crate::error::AutoBackupResult;
use crate::logging::LogSink;

/// Which editor event fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Load,
    PreSave,
    PostSave,
    Manual,
}

/// Arguments shared by every trigger command
#[derive(Args, Debug, Clone)]
pub struct TriggerArgs {
    /// File to back up
    pub file: PathBuf,

    /// Treat the buffer as having unsaved changes
    #[arg(long)]
    pub dirty: bool,

    /// Treat the buffer as read-only
    #[arg(long)]
    pub read_only: bool,
}

/// Fire `trigger` for the file named in `args`
///
/// Only fails when the file cannot be described at all; backup problems
/// are reported through `sink` and the returned outcome.
pub fn handle_trigger(
    trigger: Trigger,
    args: &TriggerArgs,
    settings: &Settings,
    sink: &dyn LogSink,
) -> AutoBackupResult<BackupOutcome> {
    let mut document = FileDocument::from_path(&args.file)?.with_dirty(args.dirty);
    if args.read_only {
        document = document.with_read_only(true);
    }

    let engine = BackupEngine::new(settings, sink);

    let outcome = match trigger {
        Trigger::Load => engine.on_load(&document),
        Trigger::PreSave => engine.on_pre_save(&document),
        Trigger::PostSave => engine.on_post_save(&document),
        Trigger::Manual => engine.run_backup(&document),
    };

    if let BackupOutcome::Saved(path) = &outcome {
        println!("{}", path.display());
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Settings, PathBuf) {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            backup_dir: temp.path().join("bak").to_string_lossy().into_owned(),
            backup_path_dir_date: false,
            backup_path_dir_filename: false,
            ..Settings::default()
        };
        let file = temp.path().join("notes.txt");
        std::fs::write(&file, "notes").unwrap();
        (temp, settings, file)
    }

    fn args(file: PathBuf) -> TriggerArgs {
        TriggerArgs {
            file,
            dirty: false,
            read_only: false,
        }
    }

    #[test]
    fn test_manual_trigger_saves() {
        let (_temp, settings, file) = setup();
        let sink = MemorySink::new();

        let outcome = handle_trigger(Trigger::Manual, &args(file), &settings, &sink).unwrap();

        assert!(outcome.is_saved());
        assert!(sink.contains("Backup saved @"));
    }

    #[test]
    fn test_pre_save_needs_dirty_flag() {
        let (_temp, settings, file) = setup();
        let sink = MemorySink::new();

        let clean = handle_trigger(Trigger::PreSave, &args(file.clone()), &settings, &sink).unwrap();
        assert_eq!(clean, BackupOutcome::Disabled);

        let dirty = TriggerArgs {
            dirty: true,
            ..args(file)
        };
        let outcome = handle_trigger(Trigger::PreSave, &dirty, &settings, &sink).unwrap();
        assert!(outcome.is_saved());
    }

    #[test]
    fn test_read_only_flag_skips() {
        let (_temp, settings, file) = setup();
        let sink = MemorySink::new();
        let read_only = TriggerArgs {
            read_only: true,
            ..args(file)
        };

        let outcome = handle_trigger(Trigger::PostSave, &read_only, &settings, &sink).unwrap();

        assert!(matches!(outcome, BackupOutcome::Skipped(_)));
        assert!(sink.contains("file is readonly"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let (temp, settings, _file) = setup();
        let sink = MemorySink::new();

        let result = handle_trigger(
            Trigger::Manual,
            &args(temp.path().join("missing.txt")),
            &settings,
            &sink,
        );

        assert!(result.is_err());
        assert!(sink.is_empty());
    }
}
