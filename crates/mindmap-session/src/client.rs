//! Connection handling for session storage.

use redis::aio::ConnectionManager;
use thiserror::Error;

/// Session storage error types.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session backend connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not authenticated")]
    Unauthorized,
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session connection pool -- `ConnectionManager` multiplexes internally
/// and is `Clone`, so every operation clones it for a mutable handle.
pub type SessionPool = ConnectionManager;

/// Initialize a session pool from a URL, e.g. `redis://127.0.0.1:6379`.
pub async fn init_pool(redis_url: &str) -> SessionResult<SessionPool> {
    let client = redis::Client::open(redis_url)?;
    let manager = ConnectionManager::new(client).await?;
    Ok(manager)
}
