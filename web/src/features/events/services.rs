use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::event::{CreateEventRequest, EventResponse, UpdateEventRequest},
    error::Result,
    models::Event,
    repository::event::EventRepository,
    services::slug,
};
use uuid::Uuid;

/// Active events with live registration counts, earliest event date first.
pub async fn list_events(pool: &PgPool, today: NaiveDate) -> Result<Vec<EventResponse>> {
    let repo = EventRepository::new(pool);
    let events = repo.list_active_with_counts().await?;

    Ok(events
        .into_iter()
        .map(|entry| EventResponse::new(entry.event, entry.registration_count, today))
        .collect())
}

/// Create a new event: derive the slug from the name and normalize the
/// team-size bounds for the event type.
pub async fn create_event(pool: &PgPool, req: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let slug = slug::slugify(&req.name);
    let (min, max) = req
        .event_type
        .team_size_bounds(req.min_team_size, req.max_team_size);

    repo.create(req, &slug, min, max).await
}

/// Update an event
pub async fn update_event(pool: &PgPool, id: Uuid, req: &UpdateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let (min, max) = req
        .event_type
        .team_size_bounds(req.min_team_size, req.max_team_size);

    repo.update(id, req, min, max).await
}

pub async fn registration_count(pool: &PgPool, id: Uuid) -> Result<i64> {
    EventRepository::new(pool).registration_count(id).await
}

/// Delete an event and, transitively, its registrations and team members
pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<()> {
    EventRepository::new(pool).delete(id).await
}
