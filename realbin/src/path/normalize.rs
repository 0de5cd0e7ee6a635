//! Path normalization functions.
//!
//! Normalization turns any path string into a canonical form:
//! - Backslashes become forward slashes
//! - UNC (`//server/share`), device (`//?/`, `//./`) and drive (`C:/`)
//!   prefixes are preserved
//! - Empty and `.` segments are dropped
//! - `..` collapses against a preceding segment, is kept at the front of a
//!   relative path, and is discarded under an absolute prefix
//!
//! None of this consults the host OS, so the result is the same everywhere.

use crate::path::coerce::path_like_to_string;
use crate::path::types::{PathLike, PathPrefix};

/// Whether `c` separates path segments on any supported platform.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

fn is_separator_byte(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

/// Normalize any path-like value.
///
/// # Examples
///
/// ```
/// use realbin::path::normalize_path;
///
/// assert_eq!(normalize_path(""), ".");
/// assert_eq!(normalize_path("\\\\server\\share\\a\\..\\b"), "//server/share/b");
/// assert_eq!(normalize_path("../../a/./b"), "../../a/b");
/// assert_eq!(normalize_path("a/../../b"), "../b");
/// assert_eq!(normalize_path("/a/b/../../.."), "/");
/// ```
pub fn normalize_path<'a>(path: impl Into<PathLike<'a>>) -> String {
    normalize_str(&path_like_to_string(path))
}

/// Normalize a path string.
///
/// This is [`normalize_path`] without the coercion step.
#[must_use]
pub fn normalize_str(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    if path == "\\" {
        return "/".to_string();
    }
    if path.len() < 2 {
        return path.to_string();
    }

    let (prefix, rest) = split_prefix(path);
    let absolute = prefix.is_absolute();
    let mut segments: Vec<&str> = Vec::new();

    for segment in rest.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    prefix.join(&segments)
}

/// Split a raw path into its prefix and the remainder after it.
///
/// Prefixes are recognized in priority order: device namespace, UNC, drive
/// letter, then any run of leading separators.
///
/// # Examples
///
/// ```
/// use realbin::path::{split_prefix, PathPrefix};
///
/// assert_eq!(split_prefix("\\\\?\\C:\\x"), (PathPrefix::Device('?'), "C:\\x"));
/// assert_eq!(split_prefix("C:/x"), (PathPrefix::Drive('C'), "x"));
/// assert_eq!(split_prefix("///x"), (PathPrefix::Root, "x"));
/// assert_eq!(split_prefix("x"), (PathPrefix::None, "x"));
/// ```
#[must_use]
pub fn split_prefix(path: &str) -> (PathPrefix<'_>, &str) {
    let bytes = path.as_bytes();

    if bytes.len() >= 4
        && is_separator_byte(bytes[0])
        && is_separator_byte(bytes[1])
        && matches!(bytes[2], b'?' | b'.')
        && is_separator_byte(bytes[3])
    {
        return (PathPrefix::Device(char::from(bytes[2])), &path[4..]);
    }

    if bytes.len() >= 2 && is_separator_byte(bytes[0]) && is_separator_byte(bytes[1]) {
        if let Some((server, share, rest)) = split_unc(&path[2..]) {
            return (PathPrefix::Unc { server, share }, rest);
        }
    }

    if bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && is_separator_byte(bytes[2])
    {
        return (PathPrefix::Drive(char::from(bytes[0])), &path[3..]);
    }

    let trimmed = path.trim_start_matches(is_separator);
    if trimmed.len() == path.len() {
        (PathPrefix::None, path)
    } else {
        (PathPrefix::Root, trimmed)
    }
}

/// Parse `server/share[/rest]` following a UNC double separator.
///
/// Both names must be real segments; anything else is not a UNC root.
fn split_unc(after: &str) -> Option<(&str, &str, &str)> {
    let server_end = after.find(is_separator)?;
    let server = &after[..server_end];
    let remainder = &after[server_end + 1..];
    let share_end = remainder.find(is_separator).unwrap_or(remainder.len());
    let share = &remainder[..share_end];

    let is_real = |name: &str| !name.is_empty() && name != "." && name != "..";
    if is_real(server) && is_real(share) {
        Some((server, share, &remainder[share_end..]))
    } else {
        None
    }
}

/// Split a path into its non-empty segments on either separator.
///
/// # Examples
///
/// ```
/// use realbin::path::split_path;
///
/// assert_eq!(split_path("/a\\b//c/"), vec!["a", "b", "c"]);
/// ```
pub fn split_path<'a>(path: impl Into<PathLike<'a>>) -> Vec<String> {
    path_like_to_string(path)
        .split(is_separator)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

/// Strip a single leading `./` or `.\` from a path.
///
/// # Examples
///
/// ```
/// use realbin::path::trim_leading_dot_slash;
///
/// assert_eq!(trim_leading_dot_slash("./bin/cli.js"), "bin/cli.js");
/// assert_eq!(trim_leading_dot_slash("../bin"), "../bin");
/// ```
#[must_use]
pub fn trim_leading_dot_slash(path: &str) -> &str {
    match path.strip_prefix('.') {
        Some(rest) if rest.starts_with(is_separator) => &rest[1..],
        _ => path,
    }
}
