use sqlx::PgPool;

use crate::error::Result;
use crate::models::Participant;

/// Repository for Participant database operations
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create the participant, or refresh name and phone if the email is
    /// already known. Repeat registrations reuse the same identity.
    pub async fn upsert(&self, full_name: &str, email: &str, phone: &str) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (full_name, email, phone)
            VALUES ($1, $2, $3)
            ON CONFLICT (email)
            DO UPDATE SET full_name = EXCLUDED.full_name, phone = EXCLUDED.phone
            RETURNING participant_id, full_name, email, phone, created_at
            "#,
        )
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .fetch_one(self.pool)
        .await?;

        Ok(participant)
    }
}
