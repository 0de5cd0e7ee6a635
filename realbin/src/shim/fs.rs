//! Filesystem access used by shim resolution.
//!
//! Resolution only ever asks four questions of the filesystem. They live
//! behind [`FileSystem`] so tests can substitute an in-memory tree and so
//! the resolver itself stays free of direct OS calls.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read-only filesystem operations needed to follow shims.
pub trait FileSystem {
    /// Whether `path` exists and is a regular file (following symlinks).
    fn is_file(&self, path: &str) -> bool;

    /// Whether anything exists at `path` (following symlinks).
    fn exists(&self, path: &str) -> bool;

    /// Read a whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid UTF-8.
    fn read_to_string(&self, path: &str) -> Result<String>;

    /// Resolve every symlink in `path`, returning the absolute real path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path or one of its parents does not exist.
    fn canonicalize(&self, path: &str) -> Result<String>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_file(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn read_to_string(&self, path: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::from_io(Path::new(path), e))
    }

    fn canonicalize(&self, path: &str) -> Result<String> {
        let real = fs::canonicalize(path).map_err(|e| Error::from_io(Path::new(path), e))?;
        let real = real.to_string_lossy();
        Ok(strip_verbatim(&real).to_string())
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn is_file(&self, path: &str) -> bool {
        (**self).is_file(path)
    }

    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &str) -> Result<String> {
        (**self).read_to_string(path)
    }

    fn canonicalize(&self, path: &str) -> Result<String> {
        (**self).canonicalize(path)
    }
}

/// Drop the `\\?\` prefix Windows adds to canonicalized paths.
///
/// `\\?\UNC\server\share` becomes `\\server\share`.
fn strip_verbatim(path: &str) -> &str {
    if path.starts_with(r"\\?\UNC\") {
        // Keep one backslash of "UNC\" so the result starts with "\\".
        &path[6..]
    } else if let Some(rest) = path.strip_prefix(r"\\?\") {
        rest
    } else {
        path
    }
}
