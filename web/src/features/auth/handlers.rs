use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use storage::{
    Database,
    dto::{auth::LoginRequest, common::ActionResponse},
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::middleware::auth::{SESSION_COOKIE, SESSION_HOURS, SessionKeys};

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = ActionResponse),
        (status = 401, description = "Invalid email or password", body = ActionResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(db): State<Database>,
    State(keys): State<SessionKeys>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> WebResult<Response> {
    req.validate()?;

    if !services::check_credentials(db.pool(), &req.email, &req.password).await? {
        tracing::warn!("Failed admin login attempt for {}", req.email);
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(ActionResponse::err("Invalid email or password")),
        )
            .into_response());
    }

    let token = keys
        .issue(&req.email)
        .map_err(|e| WebError::InternalServerError(e.to_string()))?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::hours(SESSION_HOURS))
        .build();

    Ok((jar.add(cookie), Json(ActionResponse::ok())).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = ActionResponse)
    ),
    tag = "auth"
)]
pub async fn logout(jar: CookieJar) -> Response {
    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path("/");

    (jar.remove(cookie), Json(ActionResponse::ok())).into_response()
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Whether the caller holds a valid admin session")
    ),
    tag = "auth"
)]
pub async fn session(State(keys): State<SessionKeys>, jar: CookieJar) -> Json<serde_json::Value> {
    let authenticated = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| keys.verify(cookie.value()))
        .is_some();

    Json(json!({ "authenticated": authenticated }))
}
