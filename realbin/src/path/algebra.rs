//! Path resolution and relative path computation.
//!
//! `resolve` and `relative` work on strings only. The current directory is
//! the single piece of process state they consult, and the `_from` variants
//! take it as an argument instead.

use std::env;
use std::iter;

use crate::path::coerce::path_like_to_string;
use crate::path::normalize::{is_separator, normalize_str, split_prefix, trim_leading_dot_slash};
use crate::path::types::{PathLike, PathStyle};

/// Join two path fragments with a single `/`.
fn join_two(left: &str, right: &str) -> String {
    if left.is_empty() {
        right.to_string()
    } else if left.ends_with(is_separator) {
        format!("{left}{right}")
    } else {
        format!("{left}/{right}")
    }
}

/// The current working directory as a string, or `/` when it is unavailable.
pub(crate) fn current_dir_string() -> String {
    match env::current_dir() {
        Ok(dir) => dir.to_string_lossy().into_owned(),
        Err(e) => {
            log::debug!("cannot read current directory, resolving against '/': {e}");
            "/".to_string()
        }
    }
}

impl PathStyle {
    /// Resolve `segments` right to left into an absolute path based at `cwd`.
    ///
    /// Segments are joined from the right until one of them is absolute. If
    /// none is, `cwd` is prepended. Empty segments are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use realbin::path::PathStyle;
    ///
    /// let style = PathStyle::Posix;
    /// assert_eq!(style.resolve_from("/work", &["a", "../b"]), "/work/b");
    /// assert_eq!(style.resolve_from("/work", &["/etc", "x", "/usr", "bin"]), "/usr/bin");
    /// assert_eq!(style.resolve_from("/work", &[] as &[&str]), "/work");
    /// ```
    #[must_use]
    pub fn resolve_from<S: AsRef<str>>(self, cwd: &str, segments: &[S]) -> String {
        let mut resolved = String::new();
        let mut absolute = false;

        for segment in segments.iter().rev() {
            let segment = segment.as_ref();
            if segment.is_empty() {
                continue;
            }
            resolved = join_two(segment, &resolved);
            if self.is_absolute(segment) {
                absolute = true;
                break;
            }
        }

        if !absolute {
            resolved = join_two(cwd, &resolved);
        }
        normalize_str(&resolved)
    }

    /// Resolve `segments` against the current working directory.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(self, segments: &[S]) -> String {
        self.resolve_from(&current_dir_string(), segments)
    }

    /// The shortest relative path from `from` to `to`, both based at `cwd`.
    ///
    /// Returns the empty string when both name the same location (compared
    /// case-insensitively in Windows style). When the two paths live under
    /// different roots no relative path exists and the absolute `to` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use realbin::path::PathStyle;
    ///
    /// let style = PathStyle::Posix;
    /// assert_eq!(style.relative_from("/", "/a/b", "/a/b/c/d"), "c/d");
    /// assert_eq!(style.relative_from("/", "/a/b/c", "/a"), "../..");
    /// assert_eq!(style.relative_from("/", "/a/bc", "/a/b"), "../b");
    /// assert_eq!(PathStyle::Windows.relative_from("C:/", "C:\\Foo\\Bar", "c:\\foo\\bar"), "");
    /// ```
    #[must_use]
    pub fn relative_from(self, cwd: &str, from: &str, to: &str) -> String {
        let from = self.resolve_from(cwd, &[from]);
        let to = self.resolve_from(cwd, &[to]);

        if self.same_text(&from, &to) {
            return String::new();
        }

        let (from_prefix, from_rest) = split_prefix(&from);
        let (to_prefix, to_rest) = split_prefix(&to);
        if !self.same_text(&from_prefix.root(), &to_prefix.root()) {
            return to;
        }

        let from_segments: Vec<&str> = from_rest.split('/').filter(|s| !s.is_empty()).collect();
        let to_segments: Vec<&str> = to_rest.split('/').filter(|s| !s.is_empty()).collect();
        let shared = from_segments
            .iter()
            .zip(&to_segments)
            .take_while(|(a, b)| self.same_text(a, b))
            .count();

        iter::repeat("..")
            .take(from_segments.len() - shared)
            .chain(to_segments[shared..].iter().copied())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// The shortest relative path from `from` to `to` based at the current
    /// working directory.
    #[must_use]
    pub fn relative(self, from: &str, to: &str) -> String {
        self.relative_from(&current_dir_string(), from, to)
    }

    fn same_text(self, a: &str, b: &str) -> bool {
        if self.is_windows() {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    }
}

/// Resolve path segments against the current working directory on the
/// native platform.
///
/// # Examples
///
/// ```
/// use realbin::path::resolve_path;
///
/// let resolved = resolve_path(&["/opt", "tools", "./bin"]);
/// assert!(resolved.ends_with("opt/tools/bin"));
/// ```
#[must_use]
pub fn resolve_path<S: AsRef<str>>(segments: &[S]) -> String {
    PathStyle::native().resolve(segments)
}

/// The shortest relative path between two path-like values on the native
/// platform.
pub fn relative_path<'a, 'b>(from: impl Into<PathLike<'a>>, to: impl Into<PathLike<'b>>) -> String {
    PathStyle::native().relative(&path_like_to_string(from), &path_like_to_string(to))
}

/// Like [`relative_path`], with a leading `./` trimmed and the result
/// normalized. Same locations still yield the empty string.
pub fn relative_resolve<'a, 'b>(
    from: impl Into<PathLike<'a>>,
    to: impl Into<PathLike<'b>>,
) -> String {
    let relative = relative_path(from, to);
    if relative.is_empty() {
        relative
    } else {
        normalize_str(trim_leading_dot_slash(&relative))
    }
}
