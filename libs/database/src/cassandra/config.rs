use core_config::{ConfigError, FromEnv};

/// Cassandra/ScyllaDB connection settings.
///
/// Construct manually for tests or load from environment variables:
///
/// ```ignore
/// let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "census");
/// let config = CassandraConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct CassandraConfig {
    /// Contact points (host:port pairs)
    pub contact_points: Vec<String>,

    /// Keyspace to use once connected
    pub keyspace: Option<String>,

    /// Optional username for authentication
    pub username: Option<String>,

    /// Optional password for authentication
    pub password: Option<String>,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Replication factor used when bootstrapping the keyspace
    pub replication_factor: u32,
}

impl CassandraConfig {
    pub fn new<S: Into<String>>(contact_points: Vec<S>) -> Self {
        Self {
            contact_points: contact_points.into_iter().map(|s| s.into()).collect(),
            keyspace: None,
            username: None,
            password: None,
            connect_timeout_secs: 10,
            replication_factor: 1,
        }
    }

    pub fn with_keyspace<S: Into<String>>(
        contact_points: Vec<S>,
        keyspace: impl Into<String>,
    ) -> Self {
        let mut config = Self::new(contact_points);
        config.keyspace = Some(keyspace.into());
        config
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }
}

impl Default for CassandraConfig {
    fn default() -> Self {
        Self::new(vec!["127.0.0.1:9042"])
    }
}

/// Environment variables:
/// - `CASSANDRA_CONTACT_POINTS` (required) - comma-separated host:port list
/// - `CASSANDRA_KEYSPACE` (optional)
/// - `CASSANDRA_USERNAME` / `CASSANDRA_PASSWORD` (optional)
/// - `CASSANDRA_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `CASSANDRA_REPLICATION_FACTOR` (optional, default: 1)
impl FromEnv for CassandraConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let contact_points_str = std::env::var("CASSANDRA_CONTACT_POINTS")
            .map_err(|_| ConfigError::MissingEnvVar("CASSANDRA_CONTACT_POINTS".to_string()))?;

        let contact_points: Vec<String> = contact_points_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if contact_points.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CASSANDRA_CONTACT_POINTS".to_string(),
                details: "No valid contact points provided".to_string(),
            });
        }

        let keyspace = std::env::var("CASSANDRA_KEYSPACE").ok();
        let username = std::env::var("CASSANDRA_USERNAME").ok();
        let password = std::env::var("CASSANDRA_PASSWORD").ok();

        let connect_timeout_secs = std::env::var("CASSANDRA_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_CONNECT_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        let replication_factor = std::env::var("CASSANDRA_REPLICATION_FACTOR")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "CASSANDRA_REPLICATION_FACTOR".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            contact_points,
            keyspace,
            username,
            password,
            connect_timeout_secs,
            replication_factor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"]);
        assert_eq!(config.contact_points, vec!["127.0.0.1:9042"]);
        assert!(config.keyspace.is_none());
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.replication_factor, 1);
    }

    #[test]
    fn test_config_with_keyspace() {
        let config = CassandraConfig::with_keyspace(vec!["127.0.0.1:9042"], "census");
        assert_eq!(config.keyspace(), Some("census"));
    }

    #[test]
    fn test_config_builder() {
        let config = CassandraConfig::new(vec!["127.0.0.1:9042"])
            .with_credentials("user", "pass")
            .with_connect_timeout(30);

        assert_eq!(config.username, Some("user".to_string()));
        assert_eq!(config.password, Some("pass".to_string()));
        assert_eq!(config.connect_timeout_secs, 30);
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                (
                    "CASSANDRA_CONTACT_POINTS",
                    Some("127.0.0.1:9042, 127.0.0.2:9042"),
                ),
                ("CASSANDRA_KEYSPACE", Some("census")),
            ],
            || {
                let config = CassandraConfig::from_env().unwrap();
                assert_eq!(config.contact_points.len(), 2);
                assert_eq!(config.contact_points[1], "127.0.0.2:9042");
                assert_eq!(config.keyspace, Some("census".to_string()));
            },
        );
    }

    #[test]
    fn test_config_from_env_missing_contact_points() {
        temp_env::with_vars([("CASSANDRA_CONTACT_POINTS", None::<&str>)], || {
            assert!(CassandraConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_config_from_env_blank_contact_points() {
        temp_env::with_vars([("CASSANDRA_CONTACT_POINTS", Some(" , "))], || {
            assert!(matches!(
                CassandraConfig::from_env(),
                Err(ConfigError::ParseError { .. })
            ));
        });
    }
}
