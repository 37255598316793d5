use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handlers::{delete_registration, list_registrations, register};
use crate::state::AppState;

/// Public submission route, mounted at /api/registrations.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(register))
}

/// Admin review routes, mounted under the session-gated /api/admin scope.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/registrations", get(list_registrations))
        .route("/registrations/:id", delete(delete_registration))
}
