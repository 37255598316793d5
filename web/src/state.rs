use axum::extract::FromRef;
use storage::Database;

use crate::cache::ViewCache;
use crate::middleware::auth::SessionKeys;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub cache: ViewCache,
    pub sessions: SessionKeys,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for ViewCache {
    fn from_ref(state: &AppState) -> Self {
        state.cache.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
