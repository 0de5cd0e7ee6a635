//! Coercion of path-like values into plain strings.
//!
//! Coercion never fails. Inputs that cannot carry a path (URLs with a scheme
//! other than `file:`) become the empty string.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::path::types::{PathLike, PathStyle};

impl PathLike<'_> {
    /// Convert this value to a string using the given platform style.
    ///
    /// # Examples
    ///
    /// ```
    /// use realbin::path::{PathLike, PathStyle};
    /// use url::Url;
    ///
    /// let url = Url::parse("https://example.com/a").unwrap();
    /// assert_eq!(PathLike::Url(&url).to_path_string(PathStyle::Posix), "");
    /// assert_eq!(PathLike::Text("a/b").to_path_string(PathStyle::Posix), "a/b");
    /// ```
    #[must_use]
    pub fn to_path_string(self, style: PathStyle) -> String {
        match self {
            Self::Text(text) => text.to_string(),
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Path(path) => path.to_string_lossy().into_owned(),
            Self::Url(url) => file_url_to_string(url, style),
        }
    }
}

/// Convert any path-like value to a string using the native style.
///
/// # Examples
///
/// ```
/// use realbin::path::path_like_to_string;
///
/// assert_eq!(path_like_to_string(&b"bin/node"[..]), "bin/node");
/// ```
pub fn path_like_to_string<'a>(path: impl Into<PathLike<'a>>) -> String {
    path.into().to_path_string(PathStyle::native())
}

fn file_url_to_string(url: &Url, style: PathStyle) -> String {
    if url.scheme() != "file" {
        log::debug!("ignoring non-file URL as a path: {url}");
        return String::new();
    }
    match url.to_file_path() {
        Ok(path) => path.to_string_lossy().into_owned(),
        Err(()) => {
            log::debug!("file URL has no native path form, decoding pathname: {url}");
            decode_file_url_pathname(url.path(), style)
        }
    }
}

/// Decode the raw pathname of a file URL that failed native conversion.
///
/// The pathname is percent-decoded. When it begins with a `/` that is not
/// followed by a drive letter, Windows style treats that slash as a
/// mis-encoding and strips it; Posix style keeps it because the result is a
/// valid absolute path there.
///
/// # Examples
///
/// ```
/// use realbin::path::{decode_file_url_pathname, PathStyle};
///
/// assert_eq!(decode_file_url_pathname("/C:/a%20b", PathStyle::Windows), "/C:/a b");
/// assert_eq!(decode_file_url_pathname("/share/x", PathStyle::Windows), "share/x");
/// assert_eq!(decode_file_url_pathname("/share/x", PathStyle::Posix), "/share/x");
/// ```
#[must_use]
pub fn decode_file_url_pathname(pathname: &str, style: PathStyle) -> String {
    let decoded = percent_decode_str(pathname).decode_utf8_lossy().into_owned();
    let bytes = decoded.as_bytes();
    let has_drive = bytes.len() >= 3 && bytes[1].is_ascii_alphabetic() && bytes[2] == b':';
    if style.is_windows() && !has_drive && decoded.starts_with('/') {
        decoded[1..].to_string()
    } else {
        decoded
    }
}
