//! Custom error types for AutoBackup
//!
//! Errors raised while loading settings, creating directories or copying
//! files. The backup engine never hands these to its caller; it turns them
//! into log lines at the trigger boundary.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for AutoBackup operations
#[derive(Error, Debug)]
pub enum AutoBackupError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Copying the source file to its backup location failed
    #[error("Failed to copy {} to {}: {message}", source_path.display(), destination.display())]
    Copy {
        source_path: PathBuf,
        destination: PathBuf,
        message: String,
    },

    /// The backup file was not found after copying
    #[error("Backup file missing after copy: {}", .0.display())]
    Verification(PathBuf),
}

impl AutoBackupError {
    /// Create a copy error from an underlying I/O failure
    pub fn copy(
        source_path: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::Copy {
            source_path: source_path.into(),
            destination: destination.into(),
            message: err.to_string(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for AutoBackupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AutoBackupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for AutoBackup operations
pub type AutoBackupResult<T> = Result<T, AutoBackupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AutoBackupError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
        assert!(err.is_config());
    }

    #[test]
    fn test_copy_error_display() {
        let err = AutoBackupError::copy("/src/a.txt", "/bak/a.txt.bak", "permission denied");
        assert_eq!(
            err.to_string(),
            "Failed to copy /src/a.txt to /bak/a.txt.bak: permission denied"
        );
    }

    #[test]
    fn test_verification_error_display() {
        let err = AutoBackupError::Verification(PathBuf::from("/bak/a.txt.bak"));
        assert_eq!(err.to_string(), "Backup file missing after copy: /bak/a.txt.bak");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AutoBackupError = io_err.into();
        assert!(matches!(err, AutoBackupError::Io(_)));
    }
}
