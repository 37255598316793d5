use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Registrations are written as PENDING; no transition endpoint exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "registration_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub participant_id: Uuid,
    pub event_id: Uuid,
    pub status: RegistrationStatus,
    pub team_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
