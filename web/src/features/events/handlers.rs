use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::event::{CreateEventRequest, EventResponse, UpdateEventRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::cache::{EVENTS_VIEW, ViewCache};
use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Active events with live registration counts", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    State(cache): State<ViewCache>,
) -> WebResult<Response> {
    if let Some(cached) = cache.get(EVENTS_VIEW).await {
        return Ok(Json(cached).into_response());
    }

    let today = Utc::now().date_naive();
    let events = services::list_events(db.pool(), today).await?;

    let body = serde_json::to_value(&events)
        .map_err(|e| WebError::InternalServerError(e.to_string()))?;
    cache.put(EVENTS_VIEW, body.clone()).await;

    Ok(Json(body).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/events",
    request_body = CreateEventRequest,
    security(
        ("admin_session" = [])
    ),
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "An event with this name already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    State(cache): State<ViewCache>,
    Json(req): Json<CreateEventRequest>,
) -> WebResult<Response> {
    req.validate()?;
    req.validate_team_sizes().map_err(WebError::BadRequest)?;

    let event = services::create_event(db.pool(), &req).await?;
    cache.invalidate_listings().await;

    let today = Utc::now().date_naive();
    Ok((
        StatusCode::CREATED,
        Json(EventResponse::new(event, 0, today)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    security(
        ("admin_session" = [])
    ),
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    State(cache): State<ViewCache>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> WebResult<Response> {
    req.validate()?;
    req.validate_team_sizes().map_err(WebError::BadRequest)?;

    let event = services::update_event(db.pool(), id, &req).await?;
    let count = services::registration_count(db.pool(), id).await?;
    cache.invalidate_listings().await;

    let today = Utc::now().date_naive();
    Ok(Json(EventResponse::new(event, count, today)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    security(
        ("admin_session" = [])
    ),
    responses(
        (status = 204, description = "Event and its registrations deleted"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    State(cache): State<ViewCache>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::delete_event(db.pool(), id).await?;
    cache.invalidate_listings().await;

    Ok(StatusCode::NO_CONTENT.into_response())
}
