//! Event repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::EventResult;
use crate::models::Event;

/// Repository trait for event storage operations
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Every event. Ordering across type partitions is undefined.
    async fn find_all(&self) -> EventResult<Vec<Event>>;

    /// Events of one type, newest first (store clustering order).
    async fn find_all_by_type(&self, event_type: &str) -> EventResult<Vec<Event>>;

    /// Events of one type with `start_time > after`, strictly: an event at
    /// exactly `after` is excluded. Newest first.
    async fn find_all_by_type_after(
        &self,
        event_type: &str,
        after: DateTime<Utc>,
    ) -> EventResult<Vec<Event>>;

    /// Store an event. Used by the generator and tests only.
    async fn save(&self, event: &Event) -> EventResult<()>;
}

/// In-memory implementation of [`EventRepository`] (for development and
/// testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted_desc(mut events: Vec<Event>) -> Vec<Event> {
        events.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(b.id.cmp(&a.id)));
        events
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_all(&self) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.clone())
    }

    async fn find_all_by_type(&self, event_type: &str) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;
        let matching: Vec<Event> = events
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect();
        Ok(Self::sorted_desc(matching))
    }

    async fn find_all_by_type_after(
        &self,
        event_type: &str,
        after: DateTime<Utc>,
    ) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;
        let matching: Vec<Event> = events
            .iter()
            .filter(|e| e.event_type == event_type && e.start_time > after)
            .cloned()
            .collect();
        Ok(Self::sorted_desc(matching))
    }

    async fn save(&self, event: &Event) -> EventResult<()> {
        let mut events = self.events.write().await;
        events.push(event.clone());

        tracing::debug!(event_id = %event.id, event_type = %event.event_type, "Saved event");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn event_at(event_type: &str, secs: i64) -> Event {
        Event {
            id: Uuid::now_v7(),
            event_type: event_type.to_string(),
            start_time: Utc.timestamp_opt(secs, 0).unwrap(),
            value: secs as f64,
        }
    }

    #[tokio::test]
    async fn test_find_all_by_type_is_newest_first() {
        let repo = InMemoryEventRepository::new();
        repo.save(&event_at("Transaction", 100)).await.unwrap();
        repo.save(&event_at("Transaction", 300)).await.unwrap();
        repo.save(&event_at("Transaction", 200)).await.unwrap();
        repo.save(&event_at("Audit", 400)).await.unwrap();

        let events = repo.find_all_by_type("Transaction").await.unwrap();
        let times: Vec<i64> = events.iter().map(|e| e.start_time.timestamp()).collect();
        assert_eq!(times, vec![300, 200, 100]);
    }

    #[tokio::test]
    async fn test_after_filter_is_strict() {
        let repo = InMemoryEventRepository::new();
        repo.save(&event_at("Transaction", 100)).await.unwrap();
        repo.save(&event_at("Transaction", 200)).await.unwrap();
        repo.save(&event_at("Transaction", 300)).await.unwrap();

        let after = Utc.timestamp_opt(200, 0).unwrap();
        let events = repo
            .find_all_by_type_after("Transaction", after)
            .await
            .unwrap();

        // The boundary event at exactly `after` is excluded
        let times: Vec<i64> = events.iter().map(|e| e.start_time.timestamp()).collect();
        assert_eq!(times, vec![300]);
    }

    #[tokio::test]
    async fn test_after_filter_respects_type() {
        let repo = InMemoryEventRepository::new();
        repo.save(&event_at("Transaction", 300)).await.unwrap();
        repo.save(&event_at("Audit", 300)).await.unwrap();

        let after = Utc.timestamp_opt(100, 0).unwrap();
        let events = repo.find_all_by_type_after("Audit", after).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "Audit");
    }

    #[tokio::test]
    async fn test_find_all_returns_every_partition() {
        let repo = InMemoryEventRepository::new();
        repo.save(&event_at("Transaction", 100)).await.unwrap();
        repo.save(&event_at("Audit", 200)).await.unwrap();

        let events = repo.find_all().await.unwrap();
        assert_eq!(events.len(), 2);
    }
}
