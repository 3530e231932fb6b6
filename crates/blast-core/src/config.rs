// src/config.rs
use crate::constants::{BUNDLE_SUFFIX, DEFAULT_DEBUG_ENABLED, DEFAULT_INCLUDE_HIDDEN,
                       SUPPORTED_EXTENSIONS};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct BlastConfig {
    /// Emit per-font diagnostics (successes, failures, empty directories)
    pub debug: bool,
    /// Directory-name suffix that marks a nested bundle to descend into
    pub bundle_suffix: String,
    /// Accepted font file extensions, compared case-sensitively
    pub extensions: Vec<String>,
    pub include_hidden: bool,
    /// Directories blasted after the main root, in order
    pub extra_roots: Vec<PathBuf>,
}

impl Default for BlastConfig {
    fn default() -> Self {
        Self {
            debug: DEFAULT_DEBUG_ENABLED,
            bundle_suffix: BUNDLE_SUFFIX.to_string(),
            extensions: SUPPORTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            include_hidden: DEFAULT_INCLUDE_HIDDEN,
            extra_roots: Vec::new(),
        }
    }
}

impl BlastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn with_bundle_suffix(mut self, suffix: &str) -> Self {
        self.bundle_suffix = suffix.to_string();
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn with_extra_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.extra_roots.push(root.into());
        self
    }

    /// Also blast the user's documents directory, when the platform has one
    /// and it exists.
    #[cfg(feature = "documents-dir")]
    pub fn with_documents_dir(self) -> Self {
        match dirs::document_dir() {
            Some(dir) if dir.is_dir() => self.with_extra_root(dir),
            _ => self,
        }
    }

    /// Directory containing the running executable; the default blast root.
    pub fn default_root() -> std::io::Result<PathBuf> {
        let exe = std::env::current_exe()?;
        exe.parent().map(|dir| dir.to_path_buf()).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "executable path has no parent directory",
            )
        })
    }
}
