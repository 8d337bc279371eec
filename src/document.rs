//! Document handles
//!
//! The engine never talks to an editor directly. Hosts describe the open
//! buffer through the [`Document`] trait; [`FileDocument`] is the
//! implementation used by the command-line host, built from a file on disk.

use std::path::{Path, PathBuf};

use crate::error::{AutoBackupError, AutoBackupResult};

/// A handle to the buffer a trigger fired for
pub trait Document {
    /// Whether the buffer is read-only
    fn is_read_only(&self) -> bool;

    /// Size of the buffer in bytes, if it can be determined
    fn size(&self) -> Option<u64>;

    /// Whether the buffer has unsaved changes
    fn is_dirty(&self) -> bool;

    /// Absolute path of the file behind the buffer; `None` for unsaved buffers
    fn file_path(&self) -> Option<&Path>;
}

/// A document described by plain values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDocument {
    pub path: Option<PathBuf>,
    pub read_only: bool,
    pub size: Option<u64>,
    pub dirty: bool,
}

impl FileDocument {
    /// Create a document for `path` with the given size
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: Some(path.into()),
            read_only: false,
            size: Some(size),
            dirty: false,
        }
    }

    /// A buffer that has never been saved
    pub fn unsaved(size: u64) -> Self {
        Self {
            path: None,
            read_only: false,
            size: Some(size),
            dirty: true,
        }
    }

    /// Describe a file on disk
    ///
    /// The size and read-only flag come from the file's metadata. The path
    /// is made absolute against the current directory.
    pub fn from_path(path: impl AsRef<Path>) -> AutoBackupResult<Self> {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let metadata = std::fs::metadata(&absolute).map_err(|e| {
            AutoBackupError::Io(format!("Failed to read {}: {}", absolute.display(), e))
        })?;

        Ok(Self {
            path: Some(absolute),
            read_only: metadata.permissions().readonly(),
            size: Some(metadata.len()),
            dirty: false,
        })
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    pub fn with_size(mut self, size: Option<u64>) -> Self {
        self.size = size;
        self
    }
}

impl Document for FileDocument {
    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn size(&self) -> Option<u64> {
        self.size
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn file_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_path_reads_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.txt");
        std::fs::write(&file, "hello world").unwrap();

        let doc = FileDocument::from_path(&file).unwrap();
        assert_eq!(doc.file_path(), Some(file.as_path()));
        assert_eq!(doc.size(), Some(11));
        assert!(!doc.is_read_only());
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_from_path_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileDocument::from_path(temp_dir.path().join("missing.txt"));
        assert!(matches!(result, Err(AutoBackupError::Io(_))));
    }

    #[test]
    fn test_from_path_read_only() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("locked.txt");
        std::fs::write(&file, "x").unwrap();

        let mut perms = std::fs::metadata(&file).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&file, perms).unwrap();

        let doc = FileDocument::from_path(&file).unwrap();
        assert!(doc.is_read_only());
    }

    #[test]
    fn test_unsaved_has_no_path() {
        let doc = FileDocument::unsaved(42);
        assert!(doc.file_path().is_none());
        assert!(doc.is_dirty());
    }
}
