//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::Path;

/// Everything except unreserved characters and `/` is escaped
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a relative URL path, keeping the separators
///
/// # Examples
/// ```ignore
/// encode_path("posts/hello world.html") // -> "posts/hello%20world.html"
/// ```
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_SEGMENT).to_string()
}

/// Join a base URL and a relative path with exactly one `/`
///
/// # Examples
/// ```ignore
/// full_url("https://example.com/", "about.html") // -> "https://example.com/about.html"
/// ```
pub fn full_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Path of `path` relative to `root`, always with `/` separators
pub fn relative_url_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
