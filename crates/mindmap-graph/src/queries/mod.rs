//! The fixed Cypher queries for the mind-map tree.
//!
//! Parameter names are part of the wire contract: `id`, `content`,
//! `parentId`, `childId`.

pub mod load;
pub mod mutate;

pub use load::{load_tree, TreeSnapshot};
pub use mutate::{add_child, remove_node, update_collapsed, update_content};
