//! Registration cache keyed by resolved font location

use crate::font::FontRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Registry of fonts already accepted by the host
///
/// Grows monotonically; nothing is ever evicted. Share one registrar across
/// blasts (or hand it from one blaster to the next) to keep discovery passes
/// over overlapping trees from registering the same file twice.
#[derive(Debug, Clone, Default)]
pub struct Registrar {
    records: HashMap<PathBuf, FontRecord>,
    /// Locations in first-registration order
    order: Vec<PathBuf>,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, location: &Path) -> Option<&FontRecord> {
        self.records.get(location)
    }

    /// Store `record`, replacing any entry for the same location.
    pub fn record(&mut self, record: FontRecord) {
        if !self.records.contains_key(&record.location) {
            self.order.push(record.location.clone());
        }
        self.records.insert(record.location.clone(), record);
    }

    pub fn contains(&self, location: &Path) -> bool {
        self.records.contains_key(location)
    }

    /// Every registered name so far, oldest first.
    pub fn loaded_fonts(&self) -> Vec<String> {
        self.records().map(|record| record.registered_name.clone()).collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &FontRecord> {
        self.order.iter().filter_map(|location| self.records.get(location))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
