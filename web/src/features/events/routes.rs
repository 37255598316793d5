use axum::{
    Router,
    routing::{get, post, put},
};

use super::handlers::{create_event, delete_event, list_events, update_event};
use crate::state::AppState;

/// Public catalog routes, mounted at /api/events.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_events))
}

/// Event mutations, mounted under the session-gated /api/admin scope.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/events/:id", put(update_event).delete(delete_event))
}
