use serde_json::Value;

use crate::path::parse_index;
use crate::DotPathError;

/// Delete the node at a dotted path, in place.
///
/// Walks to the parent of the final segment and removes the addressed key
/// (keeping the order of the remaining keys) or array element. Unlike
/// [`get`](crate::get), which falls back silently, a path that does not fully
/// resolve is an error here.
///
/// # Errors
///
/// Returns [`DotPathError::PathNotFound`] carrying the requested path when any
/// segment is missing, any segment is the empty string, or a non-container
/// value sits in the middle of the path.
///
/// # Example
///
/// ```
/// use dot_tree_path::{delete, DotPathError};
/// use serde_json::json;
///
/// let mut tree = json!({"a": {"b": 1, "keep": 2}});
/// delete(&mut tree, "a.b").unwrap();
/// assert_eq!(tree, json!({"a": {"keep": 2}}));
///
/// let err = delete(&mut tree, "a.b").unwrap_err();
/// assert_eq!(err, DotPathError::PathNotFound("a.b".to_string()));
/// ```
pub fn delete(tree: &mut Value, path: &str) -> Result<(), DotPathError> {
    let not_found = || DotPathError::PathNotFound(path.to_string());

    let mut segments: Vec<&str> = path.split('.').collect();
    let last = match segments.pop() {
        Some(segment) if !segment.is_empty() => segment,
        _ => return Err(not_found()),
    };

    let mut node = &mut *tree;
    for segment in segments {
        if segment.is_empty() {
            return Err(not_found());
        }
        node = match node {
            Value::Object(map) => map.get_mut(segment).ok_or_else(not_found)?,
            Value::Array(arr) => {
                let index = parse_index(segment)
                    .filter(|&i| i < arr.len())
                    .ok_or_else(not_found)?;
                &mut arr[index]
            }
            _ => return Err(not_found()),
        };
    }

    match node {
        Value::Object(map) => {
            // shift_remove keeps the insertion order of the remaining keys
            map.shift_remove(last).map(|_| ()).ok_or_else(not_found)
        }
        Value::Array(arr) => {
            let index = parse_index(last)
                .filter(|&i| i < arr.len())
                .ok_or_else(not_found)?;
            arr.remove(index);
            Ok(())
        }
        _ => Err(not_found()),
    }
}
