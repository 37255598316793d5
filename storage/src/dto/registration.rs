use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{EventType, RegistrationStatus};

/// Registration form submission: one participant, one or more events, and
/// the named teammates per team event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    pub full_name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(
        min = 7,
        max = 20,
        message = "Phone number must be between 7 and 20 characters"
    ))]
    pub phone: String,

    #[validate(length(min = 1, message = "Select at least one event"))]
    pub selected_events: Vec<Uuid>,

    #[serde(default)]
    pub team_data: HashMap<Uuid, TeamEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TeamEntry {
    pub members: Vec<String>,
}

impl RegisterRequest {
    /// Teammate names supplied for one of the selected events; empty when
    /// none were given.
    pub fn members_for(&self, event_id: Uuid) -> &[String] {
        self.team_data
            .get(&event_id)
            .map(|entry| entry.members.as_slice())
            .unwrap_or(&[])
    }
}

/// Admin listing entry: a registration with its event, participant and
/// teammates embedded.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDetailResponse {
    pub id: Uuid,
    pub status: RegistrationStatus,
    pub team_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub event: EventInfo,
    pub participant: ParticipantInfo,
    pub team_members: Vec<TeamMemberInfo>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub event_type: EventType,
    pub event_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInfo {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberInfo {
    pub id: Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "9876543210".to_string(),
            selected_events: vec![Uuid::new_v4()],
            team_data: HashMap::new(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut req = request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_empty_event_selection() {
        let mut req = request();
        req.selected_events.clear();
        assert!(req.validate().is_err());
    }

    #[test]
    fn members_default_to_empty_for_unlisted_events() {
        let req = request();
        assert!(req.members_for(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let req = request();
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("selectedEvents").is_some());
        assert!(json.get("teamData").is_some());
    }
}
