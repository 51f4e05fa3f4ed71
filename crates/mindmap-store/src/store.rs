//! The client-side mind-map store.

use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;
use tracing::{debug, info};

use mindmap_core::{MindmapError, MindmapResult, Node, NodeRef};
use mindmap_graph::{queries, GraphClient};

/// State consumed by the mind-map views.
///
/// `nodes_by_id` aliases the same node objects as the tree under
/// `root_node`, so a mutation through either is visible through both. The
/// lookup is rebuilt wholesale whenever the root is replaced; there is no
/// incremental reindexing.
///
/// The backend stays the durable store; this is a cache rebuilt on every
/// [`load`](MindmapStore::load). A backend write made directly through
/// `mindmap_graph::queries` is not reflected here until the next load.
#[derive(Default)]
pub struct MindmapStore {
    root_node: Option<NodeRef>,
    nodes_by_id: HashMap<String, NodeRef>,
}

impl MindmapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_node(&self) -> Option<&NodeRef> {
        self.root_node.as_ref()
    }

    /// Look up a node by domain id.
    pub fn node(&self, id: &str) -> Option<&NodeRef> {
        self.nodes_by_id.get(id)
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.nodes_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes_by_id.is_empty()
    }

    /// Load the whole tree from the backend, replacing the current state.
    ///
    /// An empty backend is not an error: the store materializes the default
    /// single-node tree instead.
    pub async fn load(&mut self, client: &GraphClient) -> Result<()> {
        let snapshot = queries::load_tree(client).await?;
        self.apply_loaded(snapshot.map(|s| s.to_tree()));
        info!(nodes = self.nodes_by_id.len(), "Mind-map loaded");
        Ok(())
    }

    /// Install the result of a load, falling back to the default tree.
    fn apply_loaded(&mut self, tree: Option<NodeRef>) {
        match tree {
            Some(root) => self.set_root_node(root),
            None => self.set_root_node(Node::default_root().into_ref()),
        }
    }

    /// Replace the root and rebuild the id lookup from scratch.
    ///
    /// Walks the new tree depth-first and indexes every descendant. Tree
    /// shape is a precondition, not verified here: a cyclic input will not
    /// terminate.
    pub fn set_root_node(&mut self, root: NodeRef) {
        self.nodes_by_id.clear();
        Self::index_node(&mut self.nodes_by_id, &root);
        self.root_node = Some(root);
    }

    fn index_node(lookup: &mut HashMap<String, NodeRef>, node: &NodeRef) {
        lookup.insert(node.borrow().id.clone(), Rc::clone(node));
        for child in node.borrow().children.iter() {
            Self::index_node(lookup, child);
        }
    }

    /// Set a node's content in place. Unknown ids are a silent no-op.
    ///
    /// Client-side only: persisting the edit is a separate
    /// [`queries::update_content`] call.
    pub fn update_node_content(&mut self, id: &str, content: &str) {
        match self.nodes_by_id.get(id) {
            Some(node) => node.borrow_mut().content = content.to_string(),
            None => debug!(id, "update_node_content: unknown id, ignoring"),
        }
    }

    /// Set a node's collapse flag in place. Unknown ids are a silent no-op.
    ///
    /// Client-side only, like [`update_node_content`](Self::update_node_content);
    /// persisting is a separate [`queries::update_collapsed`] call.
    pub fn update_node_collapse_state(&mut self, id: &str, is_collapsed: bool) {
        match self.nodes_by_id.get(id) {
            Some(node) => node.borrow_mut().is_collapsed = is_collapsed,
            None => debug!(id, "update_node_collapse_state: unknown id, ignoring"),
        }
    }

    /// Persist a new child under `parent_id`, then reconcile by reloading
    /// the whole tree.
    pub async fn add_child(
        &mut self,
        client: &GraphClient,
        parent_id: &str,
        id: &str,
        content: &str,
    ) -> Result<()> {
        self.validate_new_child(parent_id, id)?;
        queries::add_child(client, parent_id, id, content).await?;
        self.load(client).await
    }

    /// Remove a node and its subtree from the backend, then reconcile by
    /// reloading the whole tree.
    pub async fn remove_node(&mut self, client: &GraphClient, id: &str) -> Result<()> {
        if !self.nodes_by_id.contains_key(id) {
            return Err(MindmapError::NodeNotFound(id.to_string()).into());
        }
        queries::remove_node(client, id).await?;
        self.load(client).await
    }

    /// The parent must be indexed and the child id unused: ids are unique
    /// across the whole tree.
    fn validate_new_child(&self, parent_id: &str, id: &str) -> MindmapResult<()> {
        if !self.nodes_by_id.contains_key(parent_id) {
            return Err(MindmapError::ParentNotFound(parent_id.to_string()));
        }
        if self.nodes_by_id.contains_key(id) {
            return Err(MindmapError::validation(format!(
                "node id already in use: {id}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root -> (a -> b, c)
    fn sample_tree() -> NodeRef {
        let root = Node::default_root().into_ref();
        let a = Node::new("a", "Alpha").into_ref();
        let b = Node::new("b", "Beta").into_ref();
        let c = Node::new("c", "Gamma").into_ref();

        a.borrow_mut().parent = Some("root".to_string());
        b.borrow_mut().parent = Some("a".to_string());
        c.borrow_mut().parent = Some("root".to_string());

        a.borrow_mut().children.push(Rc::clone(&b));
        root.borrow_mut().children.push(Rc::clone(&a));
        root.borrow_mut().children.push(Rc::clone(&c));
        root
    }

    #[test]
    fn test_set_root_node_indexes_every_node_once() {
        let mut store = MindmapStore::new();
        store.set_root_node(sample_tree());

        assert_eq!(store.len(), 4);
        for id in ["root", "a", "b", "c"] {
            let node = store.node(id).expect("indexed");
            assert_eq!(node.borrow().id, id);
        }
    }

    #[test]
    fn test_set_root_node_replaces_previous_index() {
        let mut store = MindmapStore::new();
        store.set_root_node(sample_tree());
        store.set_root_node(Node::new("other", "Other root").into_ref());

        assert_eq!(store.len(), 1);
        assert!(store.node("a").is_none());
        assert_eq!(store.root_node().unwrap().borrow().id, "other");
    }

    #[test]
    fn test_empty_backend_materializes_default_root() {
        let mut store = MindmapStore::new();
        store.apply_loaded(None);

        let root = store.root_node().expect("default root").borrow();
        assert_eq!(root.id, "root");
        assert_eq!(root.content, "My Mindmap");
        assert!(root.children.is_empty());
        assert_eq!(store.nodes_by_id.len(), 1);
    }

    #[test]
    fn test_update_content_is_idempotent() {
        let mut store = MindmapStore::new();
        store.set_root_node(sample_tree());

        store.update_node_content("a", "Renamed");
        store.update_node_content("a", "Renamed");

        assert_eq!(store.node("a").unwrap().borrow().content, "Renamed");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_update_content_visible_through_tree() {
        let mut store = MindmapStore::new();
        store.set_root_node(sample_tree());

        store.update_node_content("b", "Edited");

        // The lookup and the tree alias the same node objects.
        let root = store.root_node().unwrap().borrow();
        let a = root.children[0].borrow();
        assert_eq!(a.children[0].borrow().content, "Edited");
    }

    #[test]
    fn test_update_unknown_id_is_a_no_op() {
        let mut store = MindmapStore::new();
        store.set_root_node(sample_tree());

        store.update_node_content("n1", "ghost");
        store.update_node_collapse_state("n1", true);

        assert!(store.node("n1").is_none());
        assert_eq!(store.len(), 4);
        assert!(!store.root_node().unwrap().borrow().is_collapsed);
    }

    #[test]
    fn test_update_collapse_state_in_place() {
        let mut store = MindmapStore::new();
        store.set_root_node(sample_tree());

        store.update_node_collapse_state("a", true);
        assert!(store.node("a").unwrap().borrow().is_collapsed);

        store.update_node_collapse_state("a", false);
        assert!(!store.node("a").unwrap().borrow().is_collapsed);
    }

    #[test]
    fn test_validate_new_child_rejects_unknown_parent() {
        let mut store = MindmapStore::new();
        store.set_root_node(sample_tree());

        let err = store.validate_new_child("nope", "n1").unwrap_err();
        assert!(matches!(err, MindmapError::ParentNotFound(_)));
    }

    #[test]
    fn test_validate_new_child_rejects_duplicate_id() {
        let mut store = MindmapStore::new();
        store.set_root_node(sample_tree());

        let err = store.validate_new_child("root", "b").unwrap_err();
        assert!(matches!(err, MindmapError::Validation(_)));

        assert!(store.validate_new_child("root", "n1").is_ok());
    }
}
