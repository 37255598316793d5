use sqlx::FromRow;
use uuid::Uuid;

/// Admin account. `password_hash` is an argon2id PHC string; this type is
/// never serialized to the wire.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub admin_id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: chrono::NaiveDateTime,
}
