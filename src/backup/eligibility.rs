//! Eligibility check
//!
//! Decides whether a document may be backed up right now. Rules run in a
//! fixed order and stop at the first failure.

use std::fmt;

use crate::config::Settings;
use crate::document::Document;

/// Why a document was not backed up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The buffer is read-only
    ReadOnly,
    /// The buffer size could not be determined
    SizeUnavailable,
    /// `max_backup_file_size_bytes` is missing from the settings
    MaxSizeNotConfigured,
    /// The buffer is larger than the configured maximum
    TooLarge { size: u64 },
    /// The buffer has no file behind it
    NoFileName,
}

impl Rejection {
    /// Whether the rejection points at a settings problem rather than the document
    pub fn is_misconfiguration(&self) -> bool {
        matches!(self, Self::MaxSizeNotConfigured)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadOnly => write!(f, "Backup not saved, file is readonly."),
            Self::SizeUnavailable => write!(f, "File size not available"),
            Self::MaxSizeNotConfigured => write!(f, "Max allowed size from config not available"),
            Self::TooLarge { size } => {
                write!(f, "Backup not saved, file too large ({} bytes)", size)
            }
            Self::NoFileName => write!(f, "Invalid filename"),
        }
    }
}

/// Outcome of the eligibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Rejected(Rejection),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Check whether `document` qualifies for a backup under `settings`
pub fn check_eligibility(document: &dyn Document, settings: &Settings) -> Eligibility {
    match first_rejection(document, settings) {
        Some(rejection) => Eligibility::Rejected(rejection),
        None => Eligibility::Eligible,
    }
}

fn first_rejection(document: &dyn Document, settings: &Settings) -> Option<Rejection> {
    if document.is_read_only() {
        return Some(Rejection::ReadOnly);
    }

    let Some(size) = document.size() else {
        return Some(Rejection::SizeUnavailable);
    };

    let Some(max_size) = settings.max_backup_file_size_bytes else {
        return Some(Rejection::MaxSizeNotConfigured);
    };

    if size > max_size {
        return Some(Rejection::TooLarge { size });
    }

    match document.file_path() {
        Some(path) if !path.as_os_str().is_empty() => None,
        _ => Some(Rejection::NoFileName),
    }
}
