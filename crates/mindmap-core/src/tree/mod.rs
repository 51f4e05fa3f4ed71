//! Flat backend records and the tree builder.

pub mod builder;
pub mod record;

pub use builder::build_tree;
pub use record::{NodeRecord, RelationshipRecord};
