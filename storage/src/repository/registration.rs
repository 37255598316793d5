use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::registration::{
    EventInfo, ParticipantInfo, RegistrationDetailResponse, TeamMemberInfo,
};
use crate::error::{Result, StorageError};
use crate::models::{Event, EventType, Participant, Registration, RegistrationStatus, TeamMember};
use crate::services::capacity;

#[derive(Debug, sqlx::FromRow)]
struct RegistrationDetailRow {
    registration_id: Uuid,
    status: RegistrationStatus,
    team_name: Option<String>,
    created_at: chrono::NaiveDateTime,
    event_id: Uuid,
    event_name: String,
    event_slug: String,
    event_type: EventType,
    event_date: Option<NaiveDate>,
    participant_id: Uuid,
    full_name: String,
    email: String,
    phone: String,
}

/// Repository for Registration database operations
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a participant for one event, as a single transaction.
    ///
    /// The event row is locked with `SELECT .. FOR UPDATE`, so competing
    /// registrations for the same event serialize here and each one sees
    /// the count left by the previous commit. The capacity check therefore
    /// holds at write time, not just at the time the form was rendered.
    pub async fn register(
        &self,
        event_id: Uuid,
        participant: &Participant,
        members: &[String],
    ) -> Result<Registration> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, slug, description, event_date, event_type,
                   min_team_size, max_team_size, max_slots, is_active,
                   created_at, updated_at
            FROM events
            WHERE event_id = $1
            FOR UPDATE
            "#,
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::EventNotFound(event_id))?;

        let registered: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(&mut *tx)
                .await?;

        if capacity::check(event.max_slots, registered).is_full() {
            return Err(StorageError::EventFull(event.name));
        }

        let team_name = (event.event_type == EventType::Team)
            .then(|| format!("{}'s Team", participant.full_name));

        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (participant_id, event_id, status, team_name)
            VALUES ($1, $2, $3, $4)
            RETURNING registration_id, participant_id, event_id, status, team_name,
                      created_at, updated_at
            "#,
        )
        .bind(participant.participant_id)
        .bind(event_id)
        .bind(RegistrationStatus::Pending)
        .bind(&team_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                return StorageError::AlreadyRegistered(event.name.clone());
            }
            err
        })?;

        for name in members {
            sqlx::query("INSERT INTO team_members (registration_id, name) VALUES ($1, $2)")
                .bind(registration.registration_id)
                .bind(name)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(registration)
    }

    /// Admin listing: registrations with event, participant and teammates
    /// embedded, newest first. `event_filter` narrows to one event.
    pub async fn list(
        &self,
        event_filter: Option<Uuid>,
    ) -> Result<Vec<RegistrationDetailResponse>> {
        let rows = sqlx::query_as::<_, RegistrationDetailRow>(
            r#"
            SELECT r.registration_id, r.status, r.team_name, r.created_at,
                   e.event_id, e.name AS event_name, e.slug AS event_slug,
                   e.event_type, e.event_date,
                   p.participant_id, p.full_name, p.email, p.phone
            FROM registrations r
            JOIN events e ON e.event_id = r.event_id
            JOIN participants p ON p.participant_id = r.participant_id
            WHERE $1::uuid IS NULL OR r.event_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(event_filter)
        .fetch_all(self.pool)
        .await?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.registration_id).collect();
        let members = sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT team_member_id, registration_id, name
            FROM team_members
            WHERE registration_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(self.pool)
        .await?;

        let mut members_by_registration: HashMap<Uuid, Vec<TeamMemberInfo>> = HashMap::new();
        for member in members {
            members_by_registration
                .entry(member.registration_id)
                .or_default()
                .push(TeamMemberInfo {
                    id: member.team_member_id,
                    name: member.name,
                });
        }

        Ok(rows
            .into_iter()
            .map(|row| RegistrationDetailResponse {
                id: row.registration_id,
                status: row.status,
                team_name: row.team_name,
                created_at: row.created_at,
                event: EventInfo {
                    id: row.event_id,
                    name: row.event_name,
                    slug: row.event_slug,
                    event_type: row.event_type,
                    event_date: row.event_date,
                },
                participant: ParticipantInfo {
                    id: row.participant_id,
                    full_name: row.full_name,
                    email: row.email,
                    phone: row.phone,
                },
                team_members: members_by_registration
                    .remove(&row.registration_id)
                    .unwrap_or_default(),
            })
            .collect())
    }

    /// Delete a registration and its team members. Children first; the
    /// schema does not cascade on this path.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM team_members WHERE registration_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM registrations WHERE registration_id = $1")
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
