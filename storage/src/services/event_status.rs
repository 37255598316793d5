use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where an event sits relative to the current day. Dates are calendar
/// days, so the comparison is day-granular by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Ended,
}

/// Classifies an event date against `today`. An event without a date is
/// treated as upcoming, never excluded.
pub fn classify(event_date: Option<NaiveDate>, today: NaiveDate) -> EventStatus {
    match event_date {
        None => EventStatus::Upcoming,
        Some(date) if date > today => EventStatus::Upcoming,
        Some(date) if date == today => EventStatus::Ongoing,
        Some(_) => EventStatus::Ended,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(Some(day(2026, 3, 16)), EventStatus::Upcoming)]
    #[case(Some(day(2026, 3, 15)), EventStatus::Ongoing)]
    #[case(Some(day(2026, 3, 14)), EventStatus::Ended)]
    #[case(Some(day(2020, 1, 1)), EventStatus::Ended)]
    #[case(None, EventStatus::Upcoming)]
    fn classification_partitions_every_date(
        #[case] event_date: Option<NaiveDate>,
        #[case] expected: EventStatus,
    ) {
        let today = day(2026, 3, 15);
        assert_eq!(classify(event_date, today), expected);
    }

    #[test]
    fn classification_is_stable_across_calls() {
        let today = day(2026, 3, 15);
        let date = Some(day(2026, 4, 1));
        assert_eq!(classify(date, today), classify(date, today));
    }
}
