use core_config::{env_or_default, server::ServerConfig, ConfigError, Environment, FromEnv};
use database::cassandra::CassandraConfig;

/// Default keyspace when `CASSANDRA_KEYSPACE` is not set
pub const DEFAULT_KEYSPACE: &str = "census";

/// Event generator settings.
///
/// - `EVENT_GENERATOR_ENABLED` (default: false)
/// - `EVENT_GENERATOR_INTERVAL_SECS` (default: 1)
#[derive(Clone, Debug)]
pub struct GeneratorSettings {
    pub enabled: bool,
    pub interval_secs: u64,
}

impl FromEnv for GeneratorSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let enabled = env_or_default("EVENT_GENERATOR_ENABLED", "false")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "EVENT_GENERATOR_ENABLED".to_string(),
                details: format!("{}", e),
            })?;

        let interval_secs = env_or_default("EVENT_GENERATOR_INTERVAL_SECS", "1")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "EVENT_GENERATOR_INTERVAL_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            enabled,
            interval_secs,
        })
    }
}

/// Application configuration assembled from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub cassandra: CassandraConfig,
    pub generator: GeneratorSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Contact points fall back to a local node so the service starts
        // out of the box in development
        let cassandra = if std::env::var("CASSANDRA_CONTACT_POINTS").is_ok() {
            CassandraConfig::from_env()?
        } else {
            CassandraConfig::default()
        };

        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            cassandra,
            generator: GeneratorSettings::from_env()?,
        })
    }

    /// Keyspace to bootstrap and use
    pub fn keyspace(&self) -> &str {
        self.cassandra.keyspace().unwrap_or(DEFAULT_KEYSPACE)
    }
}
