//! Path classification.
//!
//! Classification is purely lexical. A leading backslash counts as absolute
//! in both styles so a path is classified the same way no matter which OS
//! produced or inspects it.

use crate::path::coerce::path_like_to_string;
use crate::path::normalize::is_separator;
use crate::path::types::{PathLike, PathStyle};

impl PathStyle {
    /// Whether `path` is absolute under this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use realbin::path::PathStyle;
    ///
    /// assert!(PathStyle::Posix.is_absolute("/usr"));
    /// assert!(PathStyle::Posix.is_absolute("\\tools"));
    /// assert!(PathStyle::Windows.is_absolute("c:/tools"));
    /// assert!(!PathStyle::Windows.is_absolute("c:tools"));
    /// ```
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        let bytes = path.as_bytes();
        match bytes.first().copied() {
            None => false,
            Some(b'/' | b'\\') => true,
            Some(first) => {
                self.is_windows()
                    && bytes.len() > 2
                    && first.is_ascii_alphabetic()
                    && bytes[1] == b':'
                    && matches!(bytes[2], b'/' | b'\\')
            }
        }
    }

    /// Whether `path` is relative under this style.
    #[must_use]
    pub fn is_relative(self, path: &str) -> bool {
        !self.is_absolute(path)
    }

    /// Whether `path` names a filesystem location rather than a package.
    ///
    /// Bare tokens and scoped names (`@scope/name`) are package names.
    ///
    /// # Examples
    ///
    /// ```
    /// use realbin::path::PathStyle;
    ///
    /// let style = PathStyle::Posix;
    /// assert!(!style.is_path("lodash"));
    /// assert!(!style.is_path("@scope/name"));
    /// assert!(style.is_path("@scope/name/sub"));
    /// assert!(style.is_path("@scope\\name"));
    /// assert!(style.is_path(".."));
    /// ```
    #[must_use]
    pub fn is_path(self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        if path == "." || path == ".." || self.is_absolute(path) {
            return true;
        }
        if !path.contains(is_separator) {
            return false;
        }
        let scoped_package = path.starts_with('@')
            && !path.starts_with("@/")
            && !path.contains('\\')
            && path.split('/').count() <= 2;
        !scoped_package
    }
}

/// Whether any segment of `path` is exactly `node_modules`.
///
/// # Examples
///
/// ```
/// use realbin::path::is_node_modules;
///
/// assert!(is_node_modules("/repo/node_modules/.bin/tsc"));
/// assert!(is_node_modules("C:\\repo\\node_modules"));
/// assert!(!is_node_modules("/repo/my_node_modules/x"));
/// ```
pub fn is_node_modules<'a>(path: impl Into<PathLike<'a>>) -> bool {
    path_like_to_string(path)
        .split(is_separator)
        .any(|segment| segment == "node_modules")
}

/// Whether `path` is absolute on the native platform.
pub fn is_absolute<'a>(path: impl Into<PathLike<'a>>) -> bool {
    PathStyle::native().is_absolute(&path_like_to_string(path))
}

/// Whether `path` is relative on the native platform.
pub fn is_relative<'a>(path: impl Into<PathLike<'a>>) -> bool {
    PathStyle::native().is_relative(&path_like_to_string(path))
}

/// Whether `path` names a filesystem location on the native platform.
pub fn is_path<'a>(path: impl Into<PathLike<'a>>) -> bool {
    PathStyle::native().is_path(&path_like_to_string(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_posix() {
        let style = PathStyle::Posix;
        assert!(style.is_absolute("/"));
        assert!(style.is_absolute("\\x"));
        assert!(!style.is_absolute("C:\\x"));
        assert!(!style.is_absolute(""));
        assert!(!style.is_absolute("./x"));
    }

    #[test]
    fn test_is_absolute_windows() {
        let style = PathStyle::Windows;
        assert!(style.is_absolute("C:\\x"));
        assert!(style.is_absolute("z:/"));
        assert!(style.is_absolute("\\\\server\\share"));
        assert!(!style.is_absolute("C:"));
        assert!(!style.is_absolute("1:/x"));
    }

    #[test]
    fn test_is_relative_is_negation() {
        for sample in ["", "a", "/a", "C:/a", "\\a"] {
            for style in [PathStyle::Posix, PathStyle::Windows] {
                assert_ne!(style.is_absolute(sample), style.is_relative(sample));
            }
        }
    }

    #[test]
    fn test_is_path_package_names() {
        let style = PathStyle::Posix;
        assert!(!style.is_path(""));
        assert!(!style.is_path("lodash"));
        assert!(!style.is_path("@scope/name"));
        assert!(!style.is_path("@scope/"));
    }

    #[test]
    fn test_is_path_real_paths() {
        let style = PathStyle::Posix;
        assert!(style.is_path("."));
        assert!(style.is_path("./lodash"));
        assert!(style.is_path("a/b"));
        assert!(style.is_path("@/alias"));
        assert!(style.is_path("@scope/name/sub"));
        assert!(style.is_path("@scope\\name"));
        assert!(style.is_path("/abs"));
    }

    #[test]
    fn test_is_path_drive_depends_on_style() {
        assert!(PathStyle::Windows.is_path("C:\\x"));
        assert!(PathStyle::Posix.is_path("C:\\x"));
        assert!(!PathStyle::Posix.is_path("C:"));
    }

    #[test]
    fn test_is_node_modules_exact_segment() {
        assert!(is_node_modules("node_modules"));
        assert!(is_node_modules("a\\node_modules\\b"));
        assert!(!is_node_modules("node_modules_cache/x"));
        assert!(!is_node_modules(""));
    }
}
