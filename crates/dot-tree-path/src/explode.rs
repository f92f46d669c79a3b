use serde_json::{Map, Value};

use crate::set::set;

/// Build a nested tree from a flat map whose keys are dotted paths.
///
/// Each key is split into segments and written into a fresh output tree with
/// the same auto-vivification walk as [`set`]. Values that are themselves maps
/// are recursively exploded first, so flat maps can nest. The input is never
/// mutated; entries are visited in insertion order, so a later entry wins when
/// two keys address the same path.
///
/// # Example
///
/// ```
/// use dot_tree_path::explode;
/// use serde_json::json;
///
/// let flat = json!({
///     "0.title": "Foo",
///     "0.position": 1,
///     "1.title": "Bar",
///     "1.position": 0,
/// });
/// let tree = explode(flat.as_object().unwrap());
/// assert_eq!(
///     tree,
///     json!({
///         "0": {"title": "Foo", "position": 1},
///         "1": {"title": "Bar", "position": 0},
///     })
/// );
/// ```
pub fn explode(flat: &Map<String, Value>) -> Value {
    let mut tree = Value::Object(Map::new());
    for (key, value) in flat {
        let child = match value {
            Value::Object(nested) => explode(nested),
            other => other.clone(),
        };
        set(&mut tree, key, child);
    }
    tree
}
