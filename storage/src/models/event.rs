use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "event_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    Solo,
    Team,
}

impl EventType {
    /// Normalizes the stored team-size bounds for an event of this type.
    /// Solo events always carry (1, 1); team events default to 2 when a
    /// bound is not supplied.
    pub fn team_size_bounds(self, min: Option<i32>, max: Option<i32>) -> (i32, i32) {
        match self {
            EventType::Solo => (1, 1),
            EventType::Team => (min.unwrap_or(2), max.unwrap_or(2)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub event_date: Option<chrono::NaiveDate>,
    pub event_type: EventType,
    pub min_team_size: i32,
    pub max_team_size: i32,
    pub max_slots: Option<i32>,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_forces_single_member_bounds() {
        assert_eq!(EventType::Solo.team_size_bounds(Some(3), Some(5)), (1, 1));
        assert_eq!(EventType::Solo.team_size_bounds(None, None), (1, 1));
    }

    #[test]
    fn team_defaults_to_two_when_unspecified() {
        assert_eq!(EventType::Team.team_size_bounds(None, None), (2, 2));
        assert_eq!(EventType::Team.team_size_bounds(None, Some(4)), (2, 4));
    }

    #[test]
    fn team_keeps_explicit_bounds() {
        assert_eq!(EventType::Team.team_size_bounds(Some(3), Some(6)), (3, 6));
    }
}
