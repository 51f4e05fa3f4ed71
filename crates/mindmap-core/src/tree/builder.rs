//! Reshapes flat load-query results into an in-memory parent/child tree.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::node::{Node, NodeRef};

use super::record::{NodeRecord, RelationshipRecord};

/// Build the node tree from the flat results of the tree load query.
///
/// The transitive path query returns overlapping relationship chains, so the
/// same parent -> child edge can appear several times; insertion is
/// suppressed for duplicates, keyed by the child's domain id. Relationships
/// whose endpoints are missing from the supplied records are skipped.
///
/// The returned node is always the one carrying `root`'s backend handle,
/// never discovered by looking for a parentless node.
pub fn build_tree(
    root: &NodeRecord,
    chains: &[Vec<RelationshipRecord>],
    children: &[NodeRecord],
) -> NodeRef {
    // Lookup from backend handle to freshly constructed node.
    let mut nodes: HashMap<i64, NodeRef> = HashMap::new();

    let root_node = node_from_record(root);
    nodes.insert(root.backend_id, Rc::clone(&root_node));
    for record in children {
        nodes.insert(record.backend_id, node_from_record(record));
    }

    // (parent backend handle, child domain id) pairs already inserted.
    let mut seen: HashSet<(i64, String)> = HashSet::new();

    for chain in chains {
        for rel in chain {
            let (Some(parent), Some(child)) = (
                nodes.get(&rel.start_backend_id),
                nodes.get(&rel.end_backend_id),
            ) else {
                // Dangling endpoint, skip.
                continue;
            };

            let child_id = child.borrow().id.clone();
            if !seen.insert((rel.start_backend_id, child_id)) {
                continue;
            }

            let parent_id = parent.borrow().id.clone();
            child.borrow_mut().parent = Some(parent_id);
            parent.borrow_mut().children.push(Rc::clone(child));
        }
    }

    root_node
}

fn node_from_record(record: &NodeRecord) -> NodeRef {
    let mut node = Node::new(record.id.clone(), record.content.clone());
    node.is_collapsed = record.is_collapsed;
    node.into_ref()
}
