//! Separator escaping for label paths.
//!
//! A label path packs one or three segments into a single `/`-separated
//! string. Segments may themselves contain `/` or `~`, so they are escaped
//! JSON-pointer style before joining: `~` becomes `~0`, then `/` becomes
//! `~1`. The tilde pass runs first so escape markers are never confused
//! with literal tildes. Encoding and decoding are pure and total.

/// Path segment separator.
pub const SEPARATOR: char = '/';

/// Escape one path segment.
///
/// # Examples
///
/// ```
/// use form_label::path_codec::encode;
///
/// assert_eq!(encode("a/b~c"), "a~1b~0c");
/// assert_eq!(encode("plain"), "plain");
/// ```
pub fn encode(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Unescape one path segment. Inverse of [`encode`].
///
/// # Examples
///
/// ```
/// use form_label::path_codec::decode;
///
/// assert_eq!(decode("a~1b~0c"), "a/b~c");
/// ```
pub fn decode(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Encode segments and join them into a single path string.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| encode(s.as_ref()))
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Split a path string on the separator and decode each segment.
pub fn split(path: &str) -> Vec<String> {
    path.split(SEPARATOR).map(decode).collect()
}
