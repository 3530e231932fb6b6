use crate::error::PlatformError;
use std::io;
use std::path::{Path, PathBuf};

/// One immediate child of a listed directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// Final path component, lossily converted to UTF-8
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Filesystem access needed by the scanner and the registration gateway
pub trait FileSystem {
    /// Immediate children of `path`, in the order the platform reports them.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Full byte content of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Resolved form of `path` used as the dedup key.
    ///
    /// Backends without links can keep the joined path as is.
    fn canonicalize(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

/// Host font subsystem the discovered fonts are registered with
///
/// Construction and registration are split so that malformed data can be
/// told apart from a registration the host declines.
pub trait FontHost {
    /// Parsed font ready for registration
    type Handle;

    /// Parse raw bytes into a font, or `None` when the data is not a font.
    fn construct_font(&mut self, data: Vec<u8>) -> Option<Self::Handle>;

    /// Register the font for the rest of the process lifetime, returning its
    /// canonical PostScript-style name.
    fn register_font(&mut self, font: Self::Handle) -> Result<String, PlatformError>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        (**self).list_dir(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        (**self).canonicalize(path)
    }
}

impl<H: FontHost + ?Sized> FontHost for &mut H {
    type Handle = H::Handle;

    fn construct_font(&mut self, data: Vec<u8>) -> Option<Self::Handle> {
        (**self).construct_font(data)
    }

    fn register_font(&mut self, font: Self::Handle) -> Result<String, PlatformError> {
        (**self).register_font(font)
    }
}
