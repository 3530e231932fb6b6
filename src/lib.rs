//! FontBlaster - runtime registration of application-bundled fonts
//!
//! This crate ties the backend-agnostic pipeline in `blast-core` to the
//! fontdb-backed host:
//! - Recursive discovery of `.ttf`/`.otf` files inside nested `.bundle` directories
//! - At-most-once registration per resolved file location
//! - Per-file failure isolation with optional diagnostics

pub mod cli;
pub mod error;

// Re-export main types for convenience
pub use blast_core::{classify, BlastConfig, BlastReport, FontBlaster, FontRecord, Registrar,
                     RegistrationError, RegistrationOutcome, StdFileSystem};
pub use blast_fontdb::{system_blaster, FontDbHost};
pub use error::{CliError, CliResult};

/// Blaster over the real filesystem, registering into a fresh fontdb database.
pub fn blaster(config: BlastConfig) -> FontBlaster<StdFileSystem, FontDbHost> {
    FontBlaster::with_config(StdFileSystem, FontDbHost::new(), config)
}
