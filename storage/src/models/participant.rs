use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub participant_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: chrono::NaiveDateTime,
}
