//! Blast fontdb - in-process font host for blast-core
//!
//! Font bytes are validated with `fontdue` and registered into a
//! `fontdb::Database`, which plays the role of the process font subsystem:
//! once registered, a face can be queried by family or PostScript name.

mod host;

pub use host::{FontDbHost, ParsedFont};

// Re-export blast-core types for convenience
pub use blast_core::*;

/// Blaster reading the real filesystem and registering into a fresh [`FontDbHost`].
pub fn system_blaster() -> FontBlaster<StdFileSystem, FontDbHost> {
    FontBlaster::new(StdFileSystem, FontDbHost::new())
}
