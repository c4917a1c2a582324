//! Event domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Event entity.
///
/// Stored under the composite key `((event_type), start_time DESC, id)`:
/// one partition per type, newest first within the partition, with the id
/// as tiebreaker for identical start times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Unique identifier
    pub id: Uuid,
    /// Partitioning attribute
    #[serde(rename = "type")]
    pub event_type: String,
    /// Clustering attribute, descending
    pub start_time: DateTime<Utc>,
    pub value: f64,
}

impl Event {
    /// Create a new event with a generated id
    pub fn new(input: NewEvent) -> Self {
        Self {
            id: Uuid::now_v7(),
            event_type: input.event_type,
            start_time: input.start_time.unwrap_or_else(Utc::now),
            value: input.value,
        }
    }
}

/// Input for recording an event (generator and tests only; there is no
/// HTTP write path)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewEvent {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100))]
    pub event_type: String,
    /// Defaults to now when omitted
    pub start_time: Option<DateTime<Utc>>,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_start_time_to_now() {
        let before = Utc::now();
        let event = Event::new(NewEvent {
            event_type: "Transaction".to_string(),
            start_time: None,
            value: 12.5,
        });
        assert!(event.start_time >= before);
        assert_eq!(event.event_type, "Transaction");
    }

    #[test]
    fn test_serde_uses_type_field_name() {
        let event = Event::new(NewEvent {
            event_type: "Transaction".to_string(),
            start_time: None,
            value: 1.0,
        });
        let body = serde_json::to_value(&event).unwrap();
        assert_eq!(body["type"], "Transaction");
        assert!(body.get("event_type").is_none());
    }

    #[test]
    fn test_new_event_validation() {
        let input = NewEvent {
            event_type: String::new(),
            start_time: None,
            value: 1.0,
        };
        assert!(validator::Validate::validate(&input).is_err());
    }
}
