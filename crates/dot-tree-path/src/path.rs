/// Split a dotted path into its segments.
///
/// The empty path addresses the whole tree and returns an empty vec. Empty
/// segments are preserved otherwise, so `"a..b"` yields three segments.
///
/// # Example
///
/// ```
/// use dot_tree_path::split_path;
///
/// assert_eq!(split_path(""), Vec::<String>::new());
/// assert_eq!(split_path("foo"), vec!["foo"]);
/// assert_eq!(split_path("foo.bar"), vec!["foo", "bar"]);
/// assert_eq!(split_path("a..b"), vec!["a", "", "b"]);
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_string).collect()
}

/// Join segments back into a dotted path.
///
/// Inverse of [`split_path`] for every segment list whose segments contain no
/// `.` themselves.
///
/// # Example
///
/// ```
/// use dot_tree_path::join_path;
///
/// assert_eq!(join_path(&[]), "");
/// assert_eq!(join_path(&["foo".to_string(), "bar".to_string()]), "foo.bar");
/// ```
pub fn join_path(segments: &[String]) -> String {
    segments.join(".")
}

/// Check if a segment is a valid array index.
///
/// Valid indexes are non-empty, all ASCII digits, and carry no leading zero
/// (except `"0"` itself).
///
/// # Example
///
/// ```
/// use dot_tree_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("42"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index(""));
/// ```
pub fn is_valid_index(segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let bytes = segment.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a segment as an array index.
pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    if !is_valid_index(segment) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path(""), Vec::<String>::new());
        assert_eq!(split_path("foo"), vec!["foo"]);
        assert_eq!(split_path("foo.bar.baz"), vec!["foo", "bar", "baz"]);
        assert_eq!(split_path("."), vec!["", ""]);
        assert_eq!(split_path("a..b"), vec!["a", "", "b"]);
        assert_eq!(split_path("0.title"), vec!["0", "title"]);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(&[]), "");
        assert_eq!(join_path(&["foo".to_string()]), "foo");
        assert_eq!(
            join_path(&["foo".to_string(), "bar".to_string()]),
            "foo.bar"
        );
    }

    #[test]
    fn test_split_join_roundtrip() {
        for path in ["foo", "foo.bar", "0.title", "a..b", "x.y.z.w"] {
            assert_eq!(join_path(&split_path(path)), path);
        }
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("1"));
        assert!(is_valid_index("123"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("01"));
        assert!(!is_valid_index("-1"));
        assert!(!is_valid_index("1.5"));
        assert!(!is_valid_index("abc"));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("17"), Some(17));
        assert_eq!(parse_index("01"), None);
        assert_eq!(parse_index("x"), None);
    }
}
