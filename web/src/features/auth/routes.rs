use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{login, logout, session};
use crate::state::AppState;

/// Session endpoints, mounted at /api/auth. The login route is the one
/// admin path that stays outside the session gate.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
}
