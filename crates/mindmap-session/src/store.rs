//! Explicit load/save/clear lifecycle for the current user, replacing
//! ambient global session state.

use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::{SessionError, SessionPool, SessionResult};

/// Key holding the serialized current user.
const USER_KEY: &str = "user";

/// The authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    /// RFC 3339 login timestamp, stamped on save.
    pub logged_in_at: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: None,
            logged_in_at: None,
        }
    }
}

/// Session context gating the authenticated-only editor view.
#[derive(Clone)]
pub struct SessionStore {
    pool: SessionPool,
}

impl SessionStore {
    pub fn new(pool: SessionPool) -> Self {
        Self { pool }
    }

    /// Load the current user, or `None` when nobody is logged in.
    pub async fn load_user(&self) -> SessionResult<Option<User>> {
        let mut conn = self.pool.clone();
        let json: Option<String> = conn.get(USER_KEY).await?;
        match json {
            Some(j) => Ok(Some(serde_json::from_str(&j)?)),
            None => Ok(None),
        }
    }

    /// Persist `user` as the current user, stamping the login time.
    pub async fn save_user(&self, user: &User) -> SessionResult<()> {
        let mut stamped = user.clone();
        stamped.logged_in_at = Some(chrono::Utc::now().to_rfc3339());
        let json = serde_json::to_string(&stamped)?;

        let mut conn = self.pool.clone();
        conn.set::<_, _, ()>(USER_KEY, json).await?;
        debug!(username = %stamped.username, "Session user saved");
        Ok(())
    }

    /// Clear the current user. Clearing an empty session is a no-op.
    pub async fn clear_user(&self) -> SessionResult<()> {
        let mut conn = self.pool.clone();
        conn.del::<_, ()>(USER_KEY).await?;
        Ok(())
    }

    /// Authorization check for the editor view: returns the current user,
    /// or [`SessionError::Unauthorized`] when the session is empty.
    pub async fn require_user(&self) -> SessionResult<User> {
        self.load_user().await?.ok_or(SessionError::Unauthorized)
    }
}
