//! SQL `ORDER BY` style sorting for sequences of record maps.
//!
//! Parses specifications like `"position ASC, title DESC"` and stably sorts a
//! sequence of flat [`serde_json::Value`] records by the named fields,
//! case-insensitively, with per-field direction.
//!
//! # Example
//!
//! ```
//! use dot_tree_order_by::order_by;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"title": "Foo", "position": 1}),
//!     json!({"title": "Bar", "position": 0}),
//! ];
//!
//! let sorted = order_by(&records, "position ASC, title ASC");
//! assert_eq!(sorted[0]["title"], json!("Bar"));
//! assert_eq!(sorted[1]["title"], json!("Foo"));
//! ```

mod sort;
mod spec;

pub use sort::order_by;
pub use spec::{parse_order_by, Direction, OrderClause};
