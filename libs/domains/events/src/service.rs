//! Event service layer

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::error::EventResult;
use crate::models::{Event, NewEvent};
use crate::repository::EventRepository;

/// Thin façade over the event repository.
///
/// Stateless; safe to share across concurrent callers.
pub struct EventService<R: EventRepository> {
    repository: R,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Every event, cross-partition ordering undefined
    pub async fn list_events(&self) -> EventResult<Vec<Event>> {
        self.repository.find_all().await
    }

    /// Events of one type, newest first
    pub async fn list_by_type(&self, event_type: &str) -> EventResult<Vec<Event>> {
        self.repository.find_all_by_type(event_type).await
    }

    /// Events of one type strictly after the given instant, newest first
    pub async fn list_by_type_after(
        &self,
        event_type: &str,
        after: DateTime<Utc>,
    ) -> EventResult<Vec<Event>> {
        self.repository
            .find_all_by_type_after(event_type, after)
            .await
    }

    /// Record a new event (generator and tests only)
    pub async fn record_event(&self, input: NewEvent) -> EventResult<Event> {
        input.validate()?;

        let event = Event::new(input);
        self.repository.save(&event).await?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;
    use crate::repository::mock::MockEventRepository;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_list_by_type_after_passes_bound_through() {
        let after = Utc.timestamp_opt(1_000, 0).unwrap();

        let mut repo = MockEventRepository::new();
        repo.expect_find_all_by_type_after()
            .withf(move |event_type, bound| event_type == "Transaction" && *bound == after)
            .returning(|_, _| Ok(vec![]));

        let service = EventService::new(repo);
        let events = service
            .list_by_type_after("Transaction", after)
            .await
            .unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_record_event_rejects_blank_type() {
        let mut repo = MockEventRepository::new();
        repo.expect_save().times(0);

        let service = EventService::new(repo);
        let result = service
            .record_event(NewEvent {
                event_type: String::new(),
                start_time: None,
                value: 1.0,
            })
            .await;

        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_record_event_saves_and_returns_event() {
        let mut repo = MockEventRepository::new();
        repo.expect_save().times(1).returning(|_| Ok(()));

        let service = EventService::new(repo);
        let event = service
            .record_event(NewEvent {
                event_type: "Transaction".to_string(),
                start_time: None,
                value: 99.5,
            })
            .await
            .unwrap();

        assert_eq!(event.event_type, "Transaction");
        assert_eq!(event.value, 99.5);
    }
}
