//! # Mindmap Session
//!
//! Session-scoped storage for the authenticated user.
//!
//! The current user is serialized as JSON under the key `user` in a
//! session-scoped key-value slot; the view that requires authentication
//! calls [`SessionStore::require_user`] before showing the editor.

pub mod client;
pub mod store;

pub use client::{init_pool, SessionError, SessionPool, SessionResult};
pub use store::{SessionStore, User};
