use scylla::client::session::Session;
use scylla::response::query_result::QueryResult;
use std::time::Instant;

/// Health probe result for the store
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the store answered the probe
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    /// Probe round-trip in milliseconds
    pub response_time_ms: u64,
    /// Cassandra release version, when available
    pub version: Option<String>,
}

/// Probe the store with a cheap query against `system.local`.
pub async fn check_health(session: &Session) -> bool {
    session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
        .is_ok()
}

/// Probe the store and report timing, version and error details.
pub async fn check_health_detailed(session: &Session) -> HealthStatus {
    let start = Instant::now();

    match session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
    {
        Ok(result) => {
            let elapsed = start.elapsed();
            let version = extract_version(result);

            HealthStatus {
                healthy: true,
                message: None,
                response_time_ms: elapsed.as_millis() as u64,
                version,
            }
        }
        Err(e) => {
            let elapsed = start.elapsed();
            HealthStatus {
                healthy: false,
                message: Some(e.to_string()),
                response_time_ms: elapsed.as_millis() as u64,
                version: None,
            }
        }
    }
}

fn extract_version(result: QueryResult) -> Option<String> {
    let rows_result = result.into_rows_result().ok()?;
    let mut rows = rows_result.rows::<(String,)>().ok()?;
    let row: Result<(String,), _> = rows.next()?;
    row.ok().map(|(v,)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scylla::client::session_builder::SessionBuilder;

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_check_health() {
        let session: Session = SessionBuilder::new()
            .known_node("127.0.0.1:9042")
            .build()
            .await
            .unwrap();

        assert!(check_health(&session).await);

        let status = check_health_detailed(&session).await;
        assert!(status.healthy);
        assert!(status.version.is_some());
    }
}
