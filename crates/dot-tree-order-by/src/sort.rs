use std::cmp::Ordering;

use serde_json::Value;

use crate::spec::{parse_order_by, Direction};

/// Stably sort records by an order-by specification, returning a new sequence.
///
/// One folded comparison key is built per record and clause up front, then the
/// records are sorted by the clauses as successive tie-break levels. Records
/// that compare equal across every clause keep their input order.
///
/// Comparison keys are the lower-cased string form of the field value, so
/// ordering is case-insensitive and lexicographic even for numbers (`10`
/// sorts before `2`). Fields missing from a record and `null` fields fold to
/// the empty string rather than failing.
///
/// # Example
///
/// ```
/// use dot_tree_order_by::order_by;
/// use serde_json::json;
///
/// let records = vec![
///     json!({"title": "Foo", "position": 1}),
///     json!({"title": "Bar", "position": 0}),
/// ];
/// let sorted = order_by(&records, "position ASC, title ASC");
/// assert_eq!(sorted[0], json!({"title": "Bar", "position": 0}));
/// ```
pub fn order_by(records: &[Value], order_by_spec: &str) -> Vec<Value> {
    let clauses = parse_order_by(order_by_spec);

    // One key column per clause
    let keys: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            clauses
                .iter()
                .map(|clause| fold_key(record, &clause.field))
                .collect()
        })
        .collect();

    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| {
        for (level, clause) in clauses.iter().enumerate() {
            let ordering = match clause.direction {
                Direction::Asc => keys[a][level].cmp(&keys[b][level]),
                Direction::Desc => keys[b][level].cmp(&keys[a][level]),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });

    order.into_iter().map(|i| records[i].clone()).collect()
}

/// Folded comparison key for one field of one record.
fn fold_key(record: &Value, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(s)) => s.to_lowercase(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string().to_lowercase(),
    }
}
