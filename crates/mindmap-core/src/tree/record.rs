//! Flat records returned by the tree load query.

use serde::{Deserialize, Serialize};

/// A vertex as returned by the load query.
///
/// `backend_id` is the graph database's internal handle for the vertex,
/// distinct from the domain `id` property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub backend_id: i64,
    pub id: String,
    pub content: String,
    pub is_collapsed: bool,
}

/// A parent -> child relationship between two backend vertex handles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub start_backend_id: i64,
    pub end_backend_id: i64,
}
