//! Directory scanning with nested-bundle detection

use crate::constants::{BUNDLE_SUFFIX, HIDDEN_PREFIX};
use crate::error::{ScanError, ScanResult};
use crate::traits::{DirEntry, FileSystem};
use std::io;
use std::path::{Path, PathBuf};

/// What a directory entry is to the blaster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    RegularFile,
    /// Directory named with the bundle suffix; scanned recursively
    BundleDirectory,
    /// Any other directory; never descended into
    OtherDirectory,
}

/// A classified child of a scanned directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Lists one directory level and classifies its children
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    bundle_suffix: String,
    include_hidden: bool,
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new(BUNDLE_SUFFIX, false)
    }
}

impl DirectoryScanner {
    pub fn new(bundle_suffix: &str, include_hidden: bool) -> Self {
        Self {
            bundle_suffix: bundle_suffix.to_string(),
            include_hidden,
        }
    }

    /// Immediate children of `directory`, hidden entries removed, in listing order.
    pub fn list<F: FileSystem + ?Sized>(&self, fs: &F, directory: &Path) -> ScanResult<Vec<ScannedEntry>> {
        let entries = fs.list_dir(directory).map_err(|source| ScanError::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        Ok(entries
            .into_iter()
            .filter(|entry| self.include_hidden || !entry.name.starts_with(HIDDEN_PREFIX))
            .map(|entry| {
                let kind = self.kind_of(&entry);
                ScannedEntry {
                    name: entry.name,
                    path: entry.path,
                    kind,
                }
            })
            .collect())
    }

    /// Paths of the bundle directories directly under `directory`.
    pub fn list_nested_bundles<F: FileSystem + ?Sized>(&self, fs: &F, directory: &Path) -> ScanResult<Vec<PathBuf>> {
        Ok(self
            .list(fs, directory)?
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::BundleDirectory)
            .map(|entry| entry.path)
            .collect())
    }

    fn kind_of(&self, entry: &DirEntry) -> EntryKind {
        if !entry.is_dir {
            EntryKind::RegularFile
        } else if self.is_bundle_name(&entry.name) {
            EntryKind::BundleDirectory
        } else {
            EntryKind::OtherDirectory
        }
    }

    fn is_bundle_name(&self, name: &str) -> bool {
        !self.bundle_suffix.is_empty()
            && name.len() > self.bundle_suffix.len()
            && name.ends_with(&self.bundle_suffix)
    }
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();
            // Follow links so a symlinked bundle is still a directory
            let is_dir = match std::fs::metadata(&path) {
                Ok(meta) => meta.is_dir(),
                Err(_) => entry.file_type().map(|ty| ty.is_dir()).unwrap_or(false),
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                is_dir,
            });
        }
        Ok(entries)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}
