//! Core types for path handling.
//!
//! This module defines the input union accepted by every path operation,
//! the platform style switch, and the prefix classification produced while
//! normalizing.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

/// Platform conventions used when classifying and combining paths.
///
/// Normalization itself is identical for both styles. The style only decides
/// whether drive-letter paths count as absolute, whether comparisons fold
/// case, and how malformed file URLs are repaired.
///
/// # Examples
///
/// ```
/// use realbin::path::PathStyle;
///
/// assert!(PathStyle::Windows.is_absolute("C:\\tools"));
/// assert!(!PathStyle::Posix.is_absolute("C:\\tools"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Unix conventions: `/` roots, case-sensitive comparison.
    Posix,
    /// Windows conventions: drive letters, case-insensitive comparison.
    Windows,
}

impl PathStyle {
    /// The style of the platform this crate was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Whether this is the Windows style.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Any value that can stand for a path.
///
/// Conversions exist for string slices, byte slices, standard paths and
/// URLs, so every public path function accepts all of them directly.
///
/// # Examples
///
/// ```
/// use realbin::path::{normalize_path, PathLike};
/// use std::path::Path;
///
/// assert_eq!(normalize_path("a\\b"), "a/b");
/// assert_eq!(normalize_path(Path::new("/a/./b")), "/a/b");
/// assert_eq!(normalize_path(&b"x/../y"[..]), "y");
/// assert!(matches!(PathLike::from("a"), PathLike::Text("a")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathLike<'a> {
    /// Plain text.
    Text(&'a str),
    /// A byte buffer, decoded as UTF-8.
    Bytes(&'a [u8]),
    /// A standard library path.
    Path(&'a Path),
    /// A URL. Only `file:` URLs carry a path.
    Url(&'a Url),
}

impl<'a> From<&'a str> for PathLike<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for PathLike<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a> From<&'a [u8]> for PathLike<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for PathLike<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Self::Bytes(value.as_slice())
    }
}

impl<'a> From<&'a Path> for PathLike<'a> {
    fn from(value: &'a Path) -> Self {
        Self::Path(value)
    }
}

impl<'a> From<&'a PathBuf> for PathLike<'a> {
    fn from(value: &'a PathBuf) -> Self {
        Self::Path(value.as_path())
    }
}

impl<'a> From<&'a Url> for PathLike<'a> {
    fn from(value: &'a Url) -> Self {
        Self::Url(value)
    }
}

/// The leading portion of a path that anchors it.
///
/// Every prefix except [`PathPrefix::None`] makes a path absolute, which in
/// turn stops `..` segments from climbing above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPrefix<'a> {
    /// A relative path.
    None,
    /// A single `/` root.
    Root,
    /// A UNC network root, `//server/share`.
    Unc {
        /// Server name.
        server: &'a str,
        /// Share name.
        share: &'a str,
    },
    /// A Windows device namespace root, `//?/` or `//./`.
    Device(char),
    /// A Windows drive root such as `C:/`.
    Drive(char),
}

impl PathPrefix<'_> {
    /// Whether this prefix anchors the path.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Render the prefix in normalized form.
    ///
    /// A relative path has no root and renders as `.`.
    #[must_use]
    pub fn root(&self) -> String {
        match self {
            Self::None => ".".to_string(),
            Self::Root => "/".to_string(),
            Self::Unc { server, share } => format!("//{server}/{share}"),
            Self::Device(marker) => format!("//{marker}/"),
            Self::Drive(letter) => format!("{letter}:/"),
        }
    }

    /// Attach already-normalized segments to this prefix.
    #[must_use]
    pub fn join(&self, segments: &[&str]) -> String {
        let body = segments.join("/");
        match self {
            Self::None if body.is_empty() => ".".to_string(),
            Self::None => body,
            Self::Unc { .. } if !body.is_empty() => format!("{}/{body}", self.root()),
            _ => format!("{}{body}", self.root()),
        }
    }
}
