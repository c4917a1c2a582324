use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use scylla::errors::{ExecutionError, NewSessionError};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::CassandraConfig;
use crate::common::{retry_with_backoff, RetryConfig};

/// Error type for Cassandra operations
#[derive(Debug, thiserror::Error)]
pub enum CassandraError {
    #[error("Cassandra error: {0}")]
    Scylla(#[from] NewSessionError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Keyspace error: {0}")]
    KeyspaceError(String),
}

/// Shared Cassandra session handle
pub type CassandraSession = Arc<Session>;

/// Connect to Cassandra/ScyllaDB using a [`CassandraConfig`].
///
/// Verifies the connection with a query against `system.local` before
/// returning.
pub async fn connect_from_config(
    config: &CassandraConfig,
) -> Result<CassandraSession, CassandraError> {
    info!(
        "Attempting to connect to Cassandra at {:?}",
        config.contact_points
    );

    let points: Vec<&str> = config.contact_points.iter().map(|s| s.as_str()).collect();

    let mut builder = SessionBuilder::new()
        .known_nodes(&points)
        .connection_timeout(Duration::from_secs(config.connect_timeout_secs));

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        builder = builder.user(username, password);
    }

    if let Some(ref keyspace) = config.keyspace {
        builder = builder.use_keyspace(keyspace, true);
    }

    let session: Session = builder.build().await?;

    session
        .query_unpaged("SELECT release_version FROM system.local", &[])
        .await
        .map_err(|e| CassandraError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to Cassandra");
    Ok(Arc::new(session))
}

/// Connect from config, retrying with exponential backoff on failure.
///
/// Useful for handling transient network issues during startup, e.g. when
/// the store container is still warming up.
pub async fn connect_from_config_with_retry(
    config: &CassandraConfig,
    retry_config: Option<RetryConfig>,
) -> Result<CassandraSession, CassandraError> {
    let config = config.clone();
    retry_with_backoff(
        || connect_from_config(&config),
        retry_config.unwrap_or_default(),
    )
    .await
}

/// Create a keyspace if it doesn't exist
pub async fn create_keyspace_if_not_exists(
    session: &Session,
    keyspace: &str,
    replication_factor: u32,
) -> Result<(), CassandraError> {
    let query = format!(
        "CREATE KEYSPACE IF NOT EXISTS {} WITH replication = {{'class': 'SimpleStrategy', 'replication_factor': {}}}",
        keyspace, replication_factor
    );

    session
        .query_unpaged(query, &[])
        .await
        .map_err(|e| CassandraError::KeyspaceError(e.to_string()))?;

    info!("Keyspace '{}' ready", keyspace);
    Ok(())
}

/// Switch the session to a specific keyspace
pub async fn use_keyspace(session: &Session, keyspace: &str) -> Result<(), CassandraError> {
    session
        .use_keyspace(keyspace, true)
        .await
        .map_err(|e| CassandraError::KeyspaceError(e.to_string()))?;

    info!("Using keyspace '{}'", keyspace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_connect_from_config() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
        let result = connect_from_config(&config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires actual Cassandra
    async fn test_create_keyspace() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
        let session = connect_from_config(&config).await.unwrap();
        let result = create_keyspace_if_not_exists(&session, "census_test", 1).await;
        assert!(result.is_ok());
    }
}
