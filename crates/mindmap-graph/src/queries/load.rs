//! Whole-tree load query and row conversion.

use anyhow::{Context, Result};
use neo4rs::Query;
use tracing::error;

use mindmap_core::{build_tree, NodeRecord, NodeRef, RelationshipRecord};

use crate::GraphClient;

/// Flat result of the tree load query, keyed by backend vertex handles.
#[derive(Debug, Clone)]
pub struct TreeSnapshot {
    pub root: NodeRecord,
    pub chains: Vec<Vec<RelationshipRecord>>,
    pub children: Vec<NodeRecord>,
}

impl TreeSnapshot {
    /// Reshape into the in-memory parent/child tree.
    pub fn to_tree(&self) -> NodeRef {
        build_tree(&self.root, &self.chains, &self.children)
    }
}

/// Load the whole mind-map: the root-labeled vertex plus everything
/// reachable over `IS_CHILD`, together with the relationship chains.
///
/// Returns `None` when no root vertex exists yet; the caller synthesizes
/// the default single-node tree instead of treating that as a failure.
pub async fn load_tree(client: &GraphClient) -> Result<Option<TreeSnapshot>> {
    let query = Query::new(
        "MATCH (n:MindMapRoot)
         OPTIONAL MATCH (n)-[r:IS_CHILD*]->(child)
         RETURN n AS root, collect(r) AS chains, collect(child) AS children"
            .to_string(),
    );

    let rows = client
        .query(query)
        .await
        .inspect_err(|e| error!("Failed to load mind-map from Neo4j: {e:#}"))?;

    // The root is a singleton; aggregation leaves one row per root vertex.
    let Some(row) = rows.into_iter().next() else {
        return Ok(None);
    };

    let root: neo4rs::Node = row
        .get("root")
        .context("Load query returned no root vertex")?;
    let chains: Vec<Vec<neo4rs::Relation>> = row.get("chains").unwrap_or_default();
    let children: Vec<neo4rs::Node> = row.get("children").unwrap_or_default();

    Ok(Some(TreeSnapshot {
        root: node_record(&root),
        chains: chains
            .iter()
            .map(|chain| chain.iter().map(relationship_record).collect())
            .collect(),
        children: children.iter().map(node_record).collect(),
    }))
}

fn node_record(node: &neo4rs::Node) -> NodeRecord {
    NodeRecord {
        backend_id: node.id(),
        id: node.get("id").unwrap_or_default(),
        content: node.get("content").unwrap_or_default(),
        // Trees written before collapse state existed have no property.
        is_collapsed: node.get("collapsed").unwrap_or(false),
    }
}

fn relationship_record(rel: &neo4rs::Relation) -> RelationshipRecord {
    RelationshipRecord {
        start_backend_id: rel.start_node_id(),
        end_backend_id: rel.end_node_id(),
    }
}
