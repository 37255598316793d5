use sqlx::PgPool;
use storage::{
    dto::registration::{RegisterRequest, RegistrationDetailResponse},
    error::Result,
    models::Registration,
    repository::{participant::ParticipantRepository, registration::RegistrationRepository},
};
use uuid::Uuid;

/// The registration workflow: one participant upsert per request, then one
/// transactional registration per selected event. The first failing event
/// aborts the remainder and its error names the event.
pub async fn register_participant(
    pool: &PgPool,
    req: &RegisterRequest,
) -> Result<Vec<Registration>> {
    let participant = ParticipantRepository::new(pool)
        .upsert(&req.full_name, &req.email, &req.phone)
        .await?;

    let repo = RegistrationRepository::new(pool);
    let mut created = Vec::with_capacity(req.selected_events.len());
    for &event_id in &req.selected_events {
        created.push(
            repo.register(event_id, &participant, req.members_for(event_id))
                .await?,
        );
    }

    Ok(created)
}

/// Admin listing, optionally narrowed to one event, newest first.
pub async fn list_registrations(
    pool: &PgPool,
    event_filter: Option<Uuid>,
) -> Result<Vec<RegistrationDetailResponse>> {
    RegistrationRepository::new(pool).list(event_filter).await
}

/// Delete a registration and its team members
pub async fn delete_registration(pool: &PgPool, id: Uuid) -> Result<()> {
    RegistrationRepository::new(pool).delete(id).await
}
