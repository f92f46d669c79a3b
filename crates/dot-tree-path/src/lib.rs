//! Dotted-path addressing for nested trees.
//!
//! This crate reads, writes, and deletes values inside an arbitrarily nested
//! [`serde_json::Value`] tree using a flattened path syntax (`"a.b.c"`), and
//! rebuilds nested trees from flat maps whose keys are dotted paths.
//!
//! # Example
//!
//! ```
//! use dot_tree_path::{get, set, delete};
//! use serde_json::json;
//!
//! let mut tree = json!({"page": {"title": "Home"}});
//!
//! // Read through the tree with a dotted path
//! assert_eq!(get(&tree, "page.title"), Some(&json!("Home")));
//!
//! // Writes create missing intermediate nodes
//! set(&mut tree, "page.meta.author", json!("erdmann"));
//! assert_eq!(get(&tree, "page.meta.author"), Some(&json!("erdmann")));
//!
//! // Deletes remove exactly the addressed node
//! delete(&mut tree, "page.meta").unwrap();
//! assert_eq!(get(&tree, "page.meta"), None);
//! ```

use thiserror::Error;

mod delete;
mod explode;
mod get;
mod path;
mod set;

pub use delete::delete;
pub use explode::explode;
pub use get::{get, get_mut, get_or};
pub use path::{is_valid_index, join_path, split_path};
pub use set::set;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DotPathError {
    /// The requested path does not resolve to an existing node.
    #[error("path {0:?} does not exist")]
    PathNotFound(String),
}
