use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::{
        common::ActionResponse,
        registration::{RegisterRequest, RegistrationDetailResponse},
    },
};
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::cache::ViewCache;
use crate::error::{WebError, WebResult};

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationListParams {
    /// Event filter; "all" or omitted lists every registration.
    pub event_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered for every selected event", body = ActionResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "A selected event no longer exists"),
        (status = 409, description = "Event full or already registered")
    ),
    tag = "registrations"
)]
pub async fn register(
    State(db): State<Database>,
    State(cache): State<ViewCache>,
    Json(req): Json<RegisterRequest>,
) -> WebResult<Response> {
    req.validate()?;

    services::register_participant(db.pool(), &req).await?;
    cache.invalidate_listings().await;

    Ok((StatusCode::CREATED, Json(ActionResponse::ok())).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/registrations",
    params(RegistrationListParams),
    security(
        ("admin_session" = [])
    ),
    responses(
        (status = 200, description = "Registrations with event, participant and team details, newest first", body = Vec<RegistrationDetailResponse>)
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(db): State<Database>,
    Query(params): Query<RegistrationListParams>,
) -> WebResult<Response> {
    let event_filter = match params.event_id.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(
            Uuid::parse_str(raw)
                .map_err(|_| WebError::BadRequest(format!("Invalid event id: {raw}")))?,
        ),
    };

    let registrations = services::list_registrations(db.pool(), event_filter).await?;

    Ok(Json(registrations).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    security(
        ("admin_session" = [])
    ),
    responses(
        (status = 204, description = "Registration and its team members deleted"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn delete_registration(
    State(db): State<Database>,
    State(cache): State<ViewCache>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::delete_registration(db.pool(), id).await?;
    cache.invalidate_listings().await;

    Ok(StatusCode::NO_CONTENT.into_response())
}
