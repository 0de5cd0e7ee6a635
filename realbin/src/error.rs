//! Error types for the realbin library.
//!
//! Path coercion, normalization, classification and algebra never fail, and
//! shim resolution degrades to a best-effort path instead of failing. The
//! errors below surface from the operations that do have a caller-visible
//! failure mode: PATH lookups that must succeed, configuration loading, and
//! the filesystem helpers the resolver uses internally.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a realbin error.
///
/// # Examples
///
/// ```
/// use realbin::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/usr/bin/node".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the realbin library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON descriptor (for example a Volta manifest) could not be parsed.
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        /// The file that held the malformed JSON.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// No executable with the given name was found on the search path.
    #[error("binary not found: {name}")]
    BinaryNotFound {
        /// The executable name that was searched for.
        name: String,
    },
}

impl Error {
    /// Map an I/O error for `path` onto the most specific variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use realbin::Error;
    /// use std::io::{self, ErrorKind};
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(Path::new("/missing"), io::Error::from(ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Check if this error represents a missing path or binary.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. } | Self::BinaryNotFound { .. })
    }

    /// Check if this error represents a permission problem.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
