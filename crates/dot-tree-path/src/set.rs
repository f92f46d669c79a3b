use serde_json::{Map, Value};

use crate::path::parse_index;

/// Set a value in a tree by dotted path, in place.
///
/// Missing intermediate nodes spring into existence as empty maps, and an
/// intermediate scalar in the way of the path is replaced by a fresh map. The
/// final segment is assigned unconditionally, so colliding with an existing
/// value (placeholder or scalar) overwrites it.
///
/// Arrays keep their in-bounds numeric slots; an index equal to the length
/// appends, and any other segment replaces the array with a map.
///
/// The empty path is outside the contract and is a no-op.
///
/// # Example
///
/// ```
/// use dot_tree_path::set;
/// use serde_json::json;
///
/// let mut tree = json!({});
/// set(&mut tree, "a.b.c", json!(1));
/// assert_eq!(tree, json!({"a": {"b": {"c": 1}}}));
///
/// // Colliding with a scalar replaces it with a container
/// set(&mut tree, "a.b.c.d", json!(2));
/// assert_eq!(tree, json!({"a": {"b": {"c": {"d": 2}}}}));
/// ```
pub fn set(tree: &mut Value, path: &str, value: Value) {
    if path.is_empty() {
        return;
    }

    let mut segments: Vec<&str> = path.split('.').collect();
    let last = match segments.pop() {
        Some(segment) => segment,
        None => return,
    };

    let node = segments
        .into_iter()
        .fold(&mut *tree, |node, segment| descend(node, segment));

    let index = match &*node {
        Value::Array(arr) => parse_index(last).filter(|&i| i <= arr.len()),
        _ => None,
    };
    if let (Some(index), Value::Array(arr)) = (index, &mut *node) {
        if index < arr.len() {
            arr[index] = value;
        } else {
            arr.push(value);
        }
        return;
    }

    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        map.insert(last.to_string(), value);
    }
}

/// Step one segment deeper, creating the child as an empty map when it is
/// absent or not a container.
fn descend<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    let index = match &*node {
        Value::Array(arr) => parse_index(segment).filter(|&i| i <= arr.len()),
        _ => None,
    };
    match (index, node) {
        (Some(index), Value::Array(arr)) => {
            if index == arr.len() {
                arr.push(Value::Object(Map::new()));
            }
            &mut arr[index]
        }
        (_, node) => {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            match node {
                Value::Object(map) => {
                    let child = map
                        .entry(segment)
                        .or_insert_with(|| Value::Object(Map::new()));
                    if !child.is_object() && !child.is_array() {
                        *child = Value::Object(Map::new());
                    }
                    child
                }
                _ => unreachable!(),
            }
        }
    }
}
