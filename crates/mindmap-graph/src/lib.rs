//! # Mindmap Graph
//!
//! Neo4j access layer for the mind-map tree.
//!
//! Translates the four tree intents (load whole tree, update
//! content/collapse state, add child, remove subtree) into fixed
//! parameterized Cypher executed over a pooled connection.

pub mod client;
pub mod queries;

pub use client::{GraphClient, GraphConfig};
pub use queries::{add_child, load_tree, remove_node, update_collapsed, update_content, TreeSnapshot};
