//! Application state shared across HTTP handlers

use std::sync::Arc;

use chrono::Duration;
use wayfare_store::ListingStore;

use crate::auth::SessionStore;
use crate::config::Config;

/// Application state shared across all handlers
pub struct AppState {
    /// Listing repository
    pub store: ListingStore,
    /// Application configuration
    pub config: Arc<Config>,
    /// Active session tokens
    pub sessions: SessionStore,
}

impl AppState {
    /// Create new application state
    pub fn new(store: ListingStore, config: Config) -> Self {
        let sessions = SessionStore::new(Duration::minutes(config.auth.session_ttl_minutes));
        Self {
            store,
            config: Arc::new(config),
            sessions,
        }
    }
}
