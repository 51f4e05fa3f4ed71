//! # Mindmap Core
//!
//! Domain model and pure tree-building logic for the mind-map editor.
//!
//! Holds the [`Node`] type shared by the client store and the graph access
//! layer, and the builder that reshapes flat backend query results into an
//! in-memory parent/child tree.

pub mod error;
pub mod node;
pub mod tree;

pub use error::{MindmapError, MindmapResult};
pub use node::{Node, NodeRef};
pub use tree::{build_tree, NodeRecord, RelationshipRecord};
