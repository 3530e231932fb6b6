// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Why a single font candidate failed to register
///
/// Every variant is local to one candidate: the engine logs it and moves on.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("failed to read font file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("font data could not be parsed")]
    MalformedFont,

    #[error("platform rejected the font: {detail}")]
    PlatformRejection { detail: String },
}

impl RegistrationError {
    pub fn is_io(&self) -> bool {
        matches!(self, RegistrationError::Io { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, RegistrationError::MalformedFont)
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, RegistrationError::PlatformRejection { .. })
    }
}

/// Directory listing failure; turns a subtree into "no fonts here"
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to list directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::Io { path, .. } => path,
        }
    }
}

/// Rejection reported by the host font subsystem, carrying its diagnostic text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{detail}")]
pub struct PlatformError {
    pub detail: String,
}

impl PlatformError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

impl From<PlatformError> for RegistrationError {
    fn from(err: PlatformError) -> Self {
        RegistrationError::PlatformRejection { detail: err.detail }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
