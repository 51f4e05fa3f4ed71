//! Content, collapse and structure mutations.

use anyhow::Result;
use neo4rs::Query;
use tracing::error;

use mindmap_core::MindmapError;

use crate::GraphClient;

/// Set the content of the node with the given id.
///
/// Unknown ids match nothing and the call is a silent no-op, inherited from
/// the `MATCH` semantics. Safe to repeat with the same value.
pub async fn update_content(client: &GraphClient, id: &str, content: &str) -> Result<()> {
    let query = Query::new("MATCH (n:MindMapNode {id: $id}) SET n.content = $content".to_string())
        .param("id", id)
        .param("content", content);

    client
        .execute(query)
        .await
        .inspect_err(|e| error!(id, "Failed to update node content in Neo4j: {e:#}"))
}

/// Persist the collapse flag for the node with the given id.
///
/// Same shape and semantics as [`update_content`]: unknown ids are a silent
/// no-op.
pub async fn update_collapsed(client: &GraphClient, id: &str, is_collapsed: bool) -> Result<()> {
    let query = Query::new("MATCH (n:MindMapNode {id: $id}) SET n.collapsed = $collapsed".to_string())
        .param("id", id)
        .param("collapsed", is_collapsed);

    client
        .execute(query)
        .await
        .inspect_err(|e| error!(id, "Failed to update node collapse state in Neo4j: {e:#}"))
}

/// Create a node under `parent_id` and link it with `IS_CHILD`.
///
/// A missing parent is a hard error rather than the silent skip a bare
/// `MATCH` + `CREATE` would give: the query returns the created id, and an
/// empty result means the parent matched nothing.
pub async fn add_child(
    client: &GraphClient,
    parent_id: &str,
    child_id: &str,
    content: &str,
) -> Result<()> {
    let query = Query::new(
        "MATCH (p:MindMapNode {id: $parentId})
         CREATE (c:MindMapNode {id: $childId, content: $content, collapsed: false})
         CREATE (p)-[:IS_CHILD]->(c)
         RETURN c.id AS id"
            .to_string(),
    )
    .param("parentId", parent_id)
    .param("childId", child_id)
    .param("content", content);

    let rows = client
        .query(query)
        .await
        .inspect_err(|e| error!(parent_id, child_id, "Failed to add child node in Neo4j: {e:#}"))?;

    if rows.is_empty() {
        error!(parent_id, "Cannot add child: parent node does not exist");
        return Err(MindmapError::ParentNotFound(parent_id.to_string()).into());
    }
    Ok(())
}

/// Delete the node with the given id together with its whole subtree.
///
/// Descendants are deleted rather than orphaned: the owning direction is
/// parent -> children, and destroying a node destroys what it owns.
/// Removing an id that no longer exists is a no-op.
pub async fn remove_node(client: &GraphClient, id: &str) -> Result<()> {
    let query = Query::new(
        "MATCH (n:MindMapNode {id: $id})
         OPTIONAL MATCH (n)-[:IS_CHILD*]->(descendant)
         DETACH DELETE n, descendant"
            .to_string(),
    )
    .param("id", id);

    client
        .execute(query)
        .await
        .inspect_err(|e| error!(id, "Failed to remove node from Neo4j: {e:#}"))
}
