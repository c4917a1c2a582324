//! Periodic demo-data generator.
//!
//! Records a random "Transaction" event at a fixed interval. Off by
//! default; the api binary spawns it only when enabled by configuration.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::models::NewEvent;
use crate::repository::EventRepository;
use crate::service::EventService;

const GENERATED_EVENT_TYPE: &str = "Transaction";

/// Background task that periodically records a random event.
pub struct EventGenerator<R: EventRepository> {
    service: Arc<EventService<R>>,
    interval: Duration,
}

impl<R: EventRepository> EventGenerator<R> {
    pub fn new(service: Arc<EventService<R>>, interval: Duration) -> Self {
        Self { service, interval }
    }

    /// Run until the shutdown signal fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        info!(interval_secs = self.interval.as_secs(), "Event generator started");
        let mut ticker = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let event = NewEvent {
                        event_type: GENERATED_EVENT_TYPE.to_string(),
                        start_time: None,
                        value: rand::rng().random_range(0.0..1000.0),
                    };
                    if let Err(e) = self.service.record_event(event).await {
                        warn!(error = %e, "Failed to record generated event");
                    }
                }
                _ = shutdown.recv() => {
                    info!("Event generator stopping");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryEventRepository;

    #[tokio::test]
    async fn test_generator_records_events_until_shutdown() {
        let repository = InMemoryEventRepository::new();
        let service = Arc::new(EventService::new(repository.clone()));
        let (tx, rx) = broadcast::channel(1);

        let generator = EventGenerator::new(service, Duration::from_millis(10));
        let handle = tokio::spawn(generator.run(rx));

        tokio::time::sleep(Duration::from_millis(50)).await;
        tx.send(()).unwrap();
        handle.await.unwrap();

        let events = repository.find_all_by_type(GENERATED_EVENT_TYPE).await.unwrap();
        assert!(!events.is_empty());
        assert!(events.iter().all(|e| (0.0..1000.0).contains(&e.value)));
    }
}
