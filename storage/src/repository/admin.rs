use sqlx::PgPool;

use crate::error::Result;
use crate::models::Admin;

/// Repository for Admin database operations
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            SELECT admin_id, email, password_hash, created_at
            FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(admin)
    }

    /// Idempotent seed insert; an existing account is left untouched.
    pub async fn ensure(&self, email: &str, password_hash: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO admins (email, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
