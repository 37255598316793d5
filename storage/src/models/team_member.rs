use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A named teammate attached to a registration. Team members beyond the
/// leader are display names only, not participants.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamMember {
    pub team_member_id: Uuid,
    pub registration_id: Uuid,
    pub name: String,
}
