//! Cassandra/ScyllaDB implementation of [`EventRepository`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::cassandra::CassandraSession;
use scylla::response::query_result::QueryResult;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::Event;
use crate::repository::EventRepository;

/// Store-backed event repository over the `events` table.
#[derive(Clone)]
pub struct ScyllaEventRepository {
    session: CassandraSession,
}

impl ScyllaEventRepository {
    pub fn new(session: CassandraSession) -> Self {
        Self { session }
    }

    /// Create the events table if it doesn't exist
    pub async fn create_tables(&self) -> EventResult<()> {
        self.session
            .query_unpaged(
                "CREATE TABLE IF NOT EXISTS events ( \
                     event_type text, \
                     start_time timestamp, \
                     event_id uuid, \
                     value double, \
                     PRIMARY KEY ((event_type), start_time, event_id)) \
                 WITH CLUSTERING ORDER BY (start_time DESC, event_id ASC)",
                &[],
            )
            .await
            .map_err(EventError::store)?;

        tracing::info!("Events table ready");
        Ok(())
    }

    fn collect_rows(result: QueryResult) -> EventResult<Vec<Event>> {
        let rows_result = result.into_rows_result().map_err(EventError::store)?;
        let mut events = Vec::new();
        for row in rows_result
            .rows::<(String, DateTime<Utc>, Uuid, f64)>()
            .map_err(EventError::store)?
        {
            let (event_type, start_time, id, value) = row.map_err(EventError::store)?;
            events.push(Event {
                id,
                event_type,
                start_time,
                value,
            });
        }
        Ok(events)
    }
}

#[async_trait]
impl EventRepository for ScyllaEventRepository {
    async fn find_all(&self) -> EventResult<Vec<Event>> {
        let result = self
            .session
            .query_unpaged(
                "SELECT event_type, start_time, event_id, value FROM events",
                &[],
            )
            .await
            .map_err(EventError::store)?;

        Self::collect_rows(result)
    }

    async fn find_all_by_type(&self, event_type: &str) -> EventResult<Vec<Event>> {
        let result = self
            .session
            .query_unpaged(
                "SELECT event_type, start_time, event_id, value FROM events \
                 WHERE event_type = ?",
                (event_type,),
            )
            .await
            .map_err(EventError::store)?;

        Self::collect_rows(result)
    }

    async fn find_all_by_type_after(
        &self,
        event_type: &str,
        after: DateTime<Utc>,
    ) -> EventResult<Vec<Event>> {
        let result = self
            .session
            .query_unpaged(
                "SELECT event_type, start_time, event_id, value FROM events \
                 WHERE event_type = ? AND start_time > ?",
                (event_type, after),
            )
            .await
            .map_err(EventError::store)?;

        Self::collect_rows(result)
    }

    async fn save(&self, event: &Event) -> EventResult<()> {
        self.session
            .query_unpaged(
                "INSERT INTO events (event_type, start_time, event_id, value) \
                 VALUES (?, ?, ?, ?)",
                (
                    event.event_type.as_str(),
                    event.start_time,
                    event.id,
                    event.value,
                ),
            )
            .await
            .map_err(EventError::store)?;

        tracing::debug!(event_id = %event.id, event_type = %event.event_type, "Saved event");
        Ok(())
    }
}
