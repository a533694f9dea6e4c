//! In-memory session token store

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// An active session
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// Holds bearer session tokens minted by `POST /api/v1/auth/sessions`
///
/// Tokens are random 128-bit values. Expired sessions are rejected on
/// lookup and pruned as they are encountered.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Mint a new session token for a user
    pub async fn create(&self, username: &str) -> (String, DateTime<Utc>) {
        let token = Uuid::new_v4().simple().to_string();
        let expires_at = Utc::now() + self.ttl;
        let mut sessions = self.sessions.write().await;
        // Opportunistic cleanup of stale entries
        let now = Utc::now();
        sessions.retain(|_, session| session.expires_at > now);
        sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                expires_at,
            },
        );
        (token, expires_at)
    }

    /// Look up an active session; expired tokens are removed and rejected
    pub async fn get(&self, token: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Some(session.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Drop a session; returns false when the token was unknown
    pub async fn revoke(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn minted_token_is_retrievable() {
        let store = SessionStore::new(Duration::minutes(60));
        let (token, expires_at) = store.create("admin").await;
        assert_eq!(token.len(), 32);
        assert!(expires_at > Utc::now());

        let session = store.get(&token).await.unwrap();
        assert_eq!(session.username, "admin");
    }

    #[tokio::test]
    async fn expired_token_is_rejected_and_pruned() {
        let store = SessionStore::new(Duration::minutes(-1));
        let (token, _) = store.create("admin").await;
        assert!(store.get(&token).await.is_none());
        // Already pruned, so revoking finds nothing
        assert!(!store.revoke(&token).await);
    }

    #[tokio::test]
    async fn revoked_token_is_gone() {
        let store = SessionStore::new(Duration::minutes(60));
        let (token, _) = store.create("admin").await;
        assert!(store.revoke(&token).await);
        assert!(store.get(&token).await.is_none());
        assert!(!store.revoke(&token).await);
    }

    #[tokio::test]
    async fn tokens_are_unique_per_session() {
        let store = SessionStore::new(Duration::minutes(60));
        let (a, _) = store.create("admin").await;
        let (b, _) = store.create("admin").await;
        assert_ne!(a, b);
    }
}
