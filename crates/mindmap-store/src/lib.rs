//! # Mindmap Store
//!
//! Client-side store for the mind-map editor: the current root node plus a
//! flat id lookup, with mutation actions and whole-tree reload against the
//! graph backend. The single source of truth consumed by the views.

pub mod store;

pub use store::MindmapStore;
