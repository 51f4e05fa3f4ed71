//! Node domain model.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Shared handle to a node.
///
/// The store's flat lookup and the tree alias the same node objects, so an
/// edit made through the lookup is visible when walking the tree. The editor
/// runs on a single-threaded event loop, hence `Rc`/`RefCell` rather than
/// locks.
pub type NodeRef = Rc<RefCell<Node>>;

/// A vertex in the mind-map tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Stable domain identifier, unique within a tree.
    pub id: String,
    /// Free-form text shown on the node.
    pub content: String,
    /// UI-only collapse flag. False when the backend has no stored value.
    #[serde(default)]
    pub is_collapsed: bool,
    /// Id of the owning parent, or `None` for the root. A back-reference
    /// only, resolved through the store's lookup; ownership runs strictly
    /// parent -> children.
    pub parent: Option<String>,
    pub children: Vec<NodeRef>,
}

impl Node {
    /// Create a detached node with no parent and no children.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            is_collapsed: false,
            parent: None,
            children: Vec::new(),
        }
    }

    /// The single-node tree used when the backend holds no mind-map yet.
    pub fn default_root() -> Self {
        Self::new("root", "My Mindmap")
    }

    /// Wrap into a shared handle.
    pub fn into_ref(self) -> NodeRef {
        Rc::new(RefCell::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root() {
        let root = Node::default_root();
        assert_eq!(root.id, "root");
        assert_eq!(root.content, "My Mindmap");
        assert!(!root.is_collapsed);
        assert!(root.parent.is_none());
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_new_node_is_detached() {
        let node = Node::new("n1", "Idea");
        assert!(node.parent.is_none());
        assert!(node.children.is_empty());
        assert!(!node.is_collapsed);
    }
}
