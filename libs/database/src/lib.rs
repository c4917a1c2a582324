//! Database library providing the Cassandra/ScyllaDB connector used by the
//! census service.
//!
//! # Examples
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::cassandra::{self, CassandraConfig};
//!
//! let config = CassandraConfig::from_env()?;
//! let session = cassandra::connect_from_config(&config).await?;
//! cassandra::create_keyspace_if_not_exists(&session, "census", 1).await?;
//! ```

pub mod cassandra;
pub mod common;

pub use common::{retry_with_backoff, RetryConfig};
