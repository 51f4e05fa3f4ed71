//! Mind-map node domain model.

pub mod model;

pub use model::{Node, NodeRef};
