//! Dummy backend for exercising the blaster without a real filesystem or font engine

use crate::error::PlatformError;
use crate::traits::{DirEntry, FileSystem, FontHost};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory directory tree
///
/// Children are listed in insertion order. Listings and reads can be made to
/// fail per path, and directory links let one tree be reached through two roots.
#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    dirs: HashMap<PathBuf, Vec<PathBuf>>,
    files: HashMap<PathBuf, Vec<u8>>,
    failing_listings: HashSet<PathBuf>,
    failing_reads: HashSet<PathBuf>,
    links: Vec<(PathBuf, PathBuf)>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `path` and any missing ancestors.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        self.ensure_dir(path.as_ref());
    }

    /// Create or overwrite the file at `path`, creating missing ancestors.
    ///
    /// A path that already names a directory is left as a directory.
    pub fn add_file(&mut self, path: impl AsRef<Path>, contents: &[u8]) {
        let path = path.as_ref();
        if self.dirs.contains_key(path) {
            return;
        }
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent);
            self.push_child(parent, path);
        }
        self.files.insert(path.to_path_buf(), contents.to_vec());
    }

    /// Make listing `path` fail with `PermissionDenied`.
    pub fn fail_listing(&mut self, path: impl AsRef<Path>) {
        self.failing_listings.insert(path.as_ref().to_path_buf());
    }

    /// Make reading `path` fail with `PermissionDenied`.
    pub fn fail_read(&mut self, path: impl AsRef<Path>) {
        self.failing_reads.insert(path.as_ref().to_path_buf());
    }

    /// Make `link` (and everything under it) resolve to `target`.
    pub fn link(&mut self, link: impl AsRef<Path>, target: impl AsRef<Path>) {
        self.links.push((link.as_ref().to_path_buf(), target.as_ref().to_path_buf()));
    }

    /// A directory replaces a file at the same path.
    fn ensure_dir(&mut self, path: &Path) {
        if self.dirs.contains_key(path) {
            return;
        }
        self.files.remove(path);
        self.dirs.insert(path.to_path_buf(), Vec::new());
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent);
            self.push_child(parent, path);
        }
    }

    fn push_child(&mut self, parent: &Path, child: &Path) {
        if let Some(children) = self.dirs.get_mut(parent) {
            if !children.iter().any(|existing| existing == child) {
                children.push(child.to_path_buf());
            }
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        for (link, target) in &self.links {
            if let Ok(rest) = path.strip_prefix(link) {
                if rest.as_os_str().is_empty() {
                    return target.clone();
                }
                return target.join(rest);
            }
        }
        path.to_path_buf()
    }
}

impl FileSystem for MemoryFs {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        if self.failing_listings.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        let real = self.resolve(path);
        match self.dirs.get(&real) {
            Some(children) => Ok(children
                .iter()
                .filter_map(|child| {
                    let name = child.file_name()?.to_string_lossy().into_owned();
                    Some(DirEntry {
                        path: path.join(&name),
                        is_dir: self.dirs.contains_key(child),
                        name,
                    })
                })
                .collect()),
            None if self.files.contains_key(&real) => {
                Err(io::Error::new(io::ErrorKind::Other, "not a directory"))
            }
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such directory")),
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.failing_reads.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        self.files
            .get(&self.resolve(path))
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        self.resolve(path)
    }
}

/// Font host that treats file content as the font's name
///
/// Bytes that are not UTF-8, or are blank, are malformed. Like a real font
/// manager it refuses a second registration under a name it already holds.
#[derive(Debug, Default)]
pub struct EchoHost {
    registered: Vec<String>,
    rejections: HashMap<String, String>,
    construct_calls: usize,
}

impl EchoHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to register `name`, reporting `detail`.
    pub fn reject(&mut self, name: &str, detail: &str) {
        self.rejections.insert(name.to_string(), detail.to_string());
    }

    /// Names accepted so far, in order.
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    pub fn construct_calls(&self) -> usize {
        self.construct_calls
    }
}

impl FontHost for EchoHost {
    type Handle = String;

    fn construct_font(&mut self, data: Vec<u8>) -> Option<String> {
        self.construct_calls += 1;
        let name = String::from_utf8(data).ok()?;
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn register_font(&mut self, font: String) -> Result<String, PlatformError> {
        if let Some(detail) = self.rejections.get(&font) {
            return Err(PlatformError::new(detail.clone()));
        }
        if self.registered.contains(&font) {
            return Err(PlatformError::new(format!(
                "a font with the PostScript name '{font}' is already registered"
            )));
        }
        self.registered.push(font.clone());
        Ok(font)
    }
}
