use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Event, EventType};
use crate::services::capacity::{self, Capacity};
use crate::services::event_status::{self, EventStatus};

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub event_date: Option<NaiveDate>,

    pub event_type: EventType,

    #[validate(range(min = 1))]
    pub min_team_size: Option<i32>,

    #[validate(range(min = 1))]
    pub max_team_size: Option<i32>,

    #[validate(range(min = 1))]
    pub max_slots: Option<i32>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Request payload for updating an existing event. A full replace; the
/// slug derived at creation is kept.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub event_date: Option<NaiveDate>,

    pub event_type: EventType,

    #[validate(range(min = 1))]
    pub min_team_size: Option<i32>,

    #[validate(range(min = 1))]
    pub max_team_size: Option<i32>,

    #[validate(range(min = 1))]
    pub max_slots: Option<i32>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

fn check_team_sizes(
    event_type: EventType,
    min: Option<i32>,
    max: Option<i32>,
) -> Result<(), String> {
    if event_type == EventType::Team {
        let (min, max) = event_type.team_size_bounds(min, max);
        if min < 2 {
            return Err("Team events need a minimum team size of at least 2".to_string());
        }
        if max < min {
            return Err(format!(
                "maxTeamSize ({max}) must be at least minTeamSize ({min})"
            ));
        }
    }
    Ok(())
}

impl CreateEventRequest {
    /// Cross-field check the derive cannot express: team bounds must be
    /// ordered and a team needs at least two people.
    pub fn validate_team_sizes(&self) -> Result<(), String> {
        check_team_sizes(self.event_type, self.min_team_size, self.max_team_size)
    }
}

impl UpdateEventRequest {
    pub fn validate_team_sizes(&self) -> Result<(), String> {
        check_team_sizes(self.event_type, self.min_team_size, self.max_team_size)
    }
}

/// Catalog entry: an event annotated with its live registration count,
/// remaining slots and day-relative status.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_type: EventType,
    pub min_team_size: i32,
    pub max_team_size: i32,
    pub max_slots: Option<i32>,
    pub is_active: bool,
    pub registration_count: i64,
    pub remaining_slots: Option<i64>,
    pub status: EventStatus,
    pub created_at: chrono::NaiveDateTime,
}

impl EventResponse {
    pub fn new(event: Event, registration_count: i64, today: NaiveDate) -> Self {
        let remaining_slots = match capacity::check(event.max_slots, registration_count) {
            Capacity::Open { remaining } => remaining,
            Capacity::Full => Some(0),
        };
        let status = event_status::classify(event.event_date, today);

        Self {
            id: event.event_id,
            name: event.name,
            slug: event.slug,
            description: event.description,
            event_date: event.event_date,
            event_type: event.event_type,
            min_team_size: event.min_team_size,
            max_team_size: event.max_team_size,
            max_slots: event.max_slots,
            is_active: event.is_active,
            registration_count,
            remaining_slots,
            status,
            created_at: event.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_request(min: Option<i32>, max: Option<i32>) -> CreateEventRequest {
        CreateEventRequest {
            name: "Cyber Security Hackathon".to_string(),
            description: None,
            event_date: None,
            event_type: EventType::Team,
            min_team_size: min,
            max_team_size: max,
            max_slots: Some(50),
            is_active: true,
        }
    }

    #[test]
    fn team_bounds_must_be_ordered() {
        let req = team_request(Some(4), Some(2));
        assert!(req.validate_team_sizes().is_err());
    }

    #[test]
    fn team_minimum_is_two() {
        let req = team_request(Some(1), Some(4));
        assert!(req.validate_team_sizes().is_err());
    }

    #[test]
    fn team_defaults_pass() {
        let req = team_request(None, None);
        assert!(req.validate_team_sizes().is_ok());
    }

    #[test]
    fn solo_ignores_supplied_bounds() {
        let mut req = team_request(Some(4), Some(2));
        req.event_type = EventType::Solo;
        assert!(req.validate_team_sizes().is_ok());
    }

    #[test]
    fn response_annotates_capacity_and_status() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let event = Event {
            event_id: Uuid::new_v4(),
            name: "AI Workshop".to_string(),
            slug: "ai-workshop".to_string(),
            description: None,
            event_date: NaiveDate::from_ymd_opt(2026, 4, 10),
            event_type: EventType::Solo,
            min_team_size: 1,
            max_team_size: 1,
            max_slots: Some(100),
            is_active: true,
            created_at: today.and_hms_opt(9, 0, 0).unwrap(),
            updated_at: today.and_hms_opt(9, 0, 0).unwrap(),
        };

        let response = EventResponse::new(event, 98, today);
        assert_eq!(response.remaining_slots, Some(2));
        assert_eq!(response.status, EventStatus::Upcoming);
    }

    #[test]
    fn unlimited_events_have_no_remaining_figure() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let event = Event {
            event_id: Uuid::new_v4(),
            name: "Open Demo Night".to_string(),
            slug: "open-demo-night".to_string(),
            description: None,
            event_date: None,
            event_type: EventType::Solo,
            min_team_size: 1,
            max_team_size: 1,
            max_slots: None,
            is_active: true,
            created_at: today.and_hms_opt(9, 0, 0).unwrap(),
            updated_at: today.and_hms_opt(9, 0, 0).unwrap(),
        };

        let response = EventResponse::new(event, 500, today);
        assert_eq!(response.remaining_slots, None);
        assert_eq!(response.status, EventStatus::Upcoming);
    }
}
