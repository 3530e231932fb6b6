//! Blast Core - backend-agnostic font discovery and registration
//!
//! Finds `.ttf`/`.otf` files inside an application directory and its nested
//! `.bundle` directories and registers each one with a host font subsystem,
//! at most once per resolved file location.

pub mod blaster;
pub mod config;
pub mod constants;
pub mod dummy_backend;
pub mod error;
pub mod font;
pub mod traits;

// Re-export main types
pub use blaster::{BlastReport, FontBlaster};
pub use config::BlastConfig;
pub use error::{PlatformError, RegistrationError, ScanError, ScanResult};
pub use font::{classify, DirectoryScanner, EntryKind, FontDescriptor, FontRecord, Registrar,
               RegistrationGateway, RegistrationOutcome, ScannedEntry, StdFileSystem};

// Re-export traits and types
pub use traits::*;
