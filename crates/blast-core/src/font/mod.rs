//! Font discovery, registration and deduplication
//!
//! The pieces the blaster composes: filename classification, directory
//! scanning with bundle detection, the registration gateway in front of the
//! host font subsystem, and the registrar that keeps repeated passes idempotent.

pub mod cache;
pub mod discovery;
pub mod gateway;
pub mod parser;

pub use cache::Registrar;
pub use discovery::{DirectoryScanner, EntryKind, ScannedEntry, StdFileSystem};
pub use gateway::RegistrationGateway;
pub use parser::{classify, classify_with};

use crate::error::RegistrationError;
use std::path::{Path, PathBuf};

/// A candidate font file found during scanning, before registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Directory joined with the entry name
    pub location: PathBuf,
    /// Filename with the extension removed
    pub name: String,
    pub extension: String,
}

impl FontDescriptor {
    pub fn new(directory: &Path, name: &str, extension: &str) -> Self {
        Self {
            location: directory.join(format!("{name}.{extension}")),
            name: name.to_string(),
            extension: extension.to_string(),
        }
    }
}

/// A font the host accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRecord {
    pub location: PathBuf,
    /// Canonical name returned by the host, not necessarily the filename
    pub registered_name: String,
}

/// Result of one registration attempt
#[derive(Debug)]
pub enum RegistrationOutcome {
    Success(FontRecord),
    Failure {
        location: PathBuf,
        error: RegistrationError,
    },
}

impl RegistrationOutcome {
    pub fn location(&self) -> &Path {
        match self {
            RegistrationOutcome::Success(record) => &record.location,
            RegistrationOutcome::Failure { location, .. } => location,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationOutcome::Success(_))
    }

    pub fn record(&self) -> Option<&FontRecord> {
        match self {
            RegistrationOutcome::Success(record) => Some(record),
            RegistrationOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&RegistrationError> {
        match self {
            RegistrationOutcome::Success(_) => None,
            RegistrationOutcome::Failure { error, .. } => Some(error),
        }
    }
}
