//! Cross-platform path normalization and algebra.
//!
//! Everything in this module is purely lexical. Paths are plain strings with
//! forward slashes, and the host OS path library is never consulted, so the
//! same input gives the same output on every platform.
//!
//! # Key Concepts
//!
//! ## Path-like inputs
//!
//! Every operation accepts a [`PathLike`]: text, a byte buffer, a standard
//! [`std::path::Path`], or a `file:` URL. Other URLs coerce to the empty
//! string.
//!
//! ## Normalization
//!
//! [`normalize_path`] produces the canonical form used throughout the crate:
//! forward slashes, no `.` segments, `..` collapsed where possible, and UNC,
//! device and drive prefixes preserved.
//!
//! ## Style
//!
//! Classification and the path algebra depend on platform conventions. The
//! free functions use [`PathStyle::native`]; the methods on [`PathStyle`]
//! take the style explicitly so Windows behavior can be exercised anywhere.
//!
//! # Examples
//!
//! ```
//! use realbin::path::{normalize_path, is_path, PathStyle};
//!
//! assert_eq!(normalize_path("\\\\server\\share\\a\\..\\b"), "//server/share/b");
//! assert!(!is_path("@scope/name"));
//!
//! let windows = PathStyle::Windows;
//! assert_eq!(windows.resolve_from("C:/work", &["..\\tools"]), "C:/tools");
//! assert_eq!(windows.relative_from("C:/", "C:\\Foo\\Bar", "c:\\foo\\bar"), "");
//! ```

pub mod algebra;
pub mod classify;
pub mod coerce;
pub mod normalize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use algebra::{relative_path, relative_resolve, resolve_path};
pub use classify::{is_absolute, is_node_modules, is_path, is_relative};
pub use coerce::{decode_file_url_pathname, path_like_to_string};
pub use normalize::{
    is_separator, normalize_path, normalize_str, split_path, split_prefix, trim_leading_dot_slash,
};
pub use types::{PathLike, PathPrefix, PathStyle};
