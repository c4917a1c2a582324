//! Cassandra/ScyllaDB connector and utilities
//!
//! Uses the `scylla` driver, which speaks the CQL protocol to both Apache
//! Cassandra and ScyllaDB.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::cassandra::{connect_from_config, create_keyspace_if_not_exists, CassandraConfig};
//!
//! let config = CassandraConfig::from_env()?;
//! let session = connect_from_config(&config).await?;
//! create_keyspace_if_not_exists(&session, "census", config.replication_factor).await?;
//! ```

mod config;
mod connector;
mod health;

pub use config::CassandraConfig;
pub use connector::{
    connect_from_config, connect_from_config_with_retry, create_keyspace_if_not_exists,
    use_keyspace, CassandraError, CassandraSession,
};
pub use health::{check_health, check_health_detailed, HealthStatus};

// Re-export scylla types for convenience
pub use scylla::client::session::Session;
pub use scylla::client::session_builder::SessionBuilder;
