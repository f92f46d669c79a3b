use serde_json::Value;

use crate::path::parse_index;

/// Get a value from a tree by dotted path.
///
/// The empty path returns the whole tree. Returns `None` on the first segment
/// that does not exist in the current node; a missing path is an expected
/// outcome, not an error. A key that holds an explicit `null` counts as
/// present.
///
/// # Example
///
/// ```
/// use dot_tree_path::get;
/// use serde_json::json;
///
/// let tree = json!({"foo": {"bar": 42}});
/// assert_eq!(get(&tree, "foo.bar"), Some(&json!(42)));
/// assert_eq!(get(&tree, "foo.missing"), None);
/// assert_eq!(get(&tree, ""), Some(&tree));
/// ```
pub fn get<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(tree);
    }

    let mut current = tree;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(arr) => arr.get(parse_index(segment)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a value from a tree by dotted path, or a fallback if the path does not
/// resolve.
///
/// # Example
///
/// ```
/// use dot_tree_path::get_or;
/// use serde_json::json;
///
/// let tree = json!({"foo": {"bar": 42}});
/// let fallback = json!("n/a");
/// assert_eq!(get_or(&tree, "foo.bar", &fallback), &json!(42));
/// assert_eq!(get_or(&tree, "foo.baz", &fallback), &json!("n/a"));
/// ```
pub fn get_or<'a>(tree: &'a Value, path: &str, fallback: &'a Value) -> &'a Value {
    get(tree, path).unwrap_or(fallback)
}

/// Get a mutable reference to a value in a tree by dotted path.
///
/// Returns `None` if the path does not resolve.
pub fn get_mut<'a>(tree: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    if path.is_empty() {
        return Some(tree);
    }

    let mut current = tree;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get_mut(segment)?,
            Value::Array(arr) => arr.get_mut(parse_index(segment)?)?,
            _ => return None,
        };
    }
    Some(current)
}
