use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::Event;

/// An event joined with its live registration count.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventWithCount {
    #[sqlx(flatten)]
    pub event: Event,
    pub registration_count: i64,
}

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List active events with their live registration counts, earliest
    /// event date first.
    pub async fn list_active_with_counts(&self) -> Result<Vec<EventWithCount>> {
        let events = sqlx::query_as::<_, EventWithCount>(
            r#"
            SELECT e.event_id, e.name, e.slug, e.description, e.event_date,
                   e.event_type, e.min_team_size, e.max_team_size, e.max_slots,
                   e.is_active, e.created_at, e.updated_at,
                   COUNT(r.registration_id) AS registration_count
            FROM events e
            LEFT JOIN registrations r ON r.event_id = e.event_id
            WHERE e.is_active
            GROUP BY e.event_id
            ORDER BY e.event_date ASC NULLS LAST, e.created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Live registration count for a single event.
    pub async fn registration_count(&self, id: Uuid) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// Create a new event
    pub async fn create(
        &self,
        req: &CreateEventRequest,
        slug: &str,
        min_team_size: i32,
        max_team_size: i32,
    ) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                name, slug, description, event_date, event_type,
                min_team_size, max_team_size, max_slots, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING event_id, name, slug, description, event_date, event_type,
                      min_team_size, max_team_size, max_slots, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(slug)
        .bind(&req.description)
        .bind(req.event_date)
        .bind(req.event_type)
        .bind(min_team_size)
        .bind(max_team_size)
        .bind(req.max_slots)
        .bind(req.is_active)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                return StorageError::ConstraintViolation(
                    "An event with this name already exists".to_string(),
                );
            }
            err
        })?;

        Ok(event)
    }

    /// Update an existing event. The slug derived at creation is kept.
    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateEventRequest,
        min_team_size: i32,
        max_team_size: i32,
    ) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET
                name = $2,
                description = $3,
                event_date = $4,
                event_type = $5,
                min_team_size = $6,
                max_team_size = $7,
                max_slots = $8,
                is_active = $9,
                updated_at = now()
            WHERE event_id = $1
            RETURNING event_id, name, slug, description, event_date, event_type,
                      min_team_size, max_team_size, max_slots, is_active,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.event_date)
        .bind(req.event_type)
        .bind(min_team_size)
        .bind(max_team_size)
        .bind(req.max_slots)
        .bind(req.is_active)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Delete an event and everything registered to it. The schema has no
    /// cascading deletes on this path, so children go first, in one
    /// transaction.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM team_members
            WHERE registration_id IN (
                SELECT registration_id FROM registrations WHERE event_id = $1
            )
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM registrations WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}
