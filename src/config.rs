use crate::error::config::ConfigError;

/// Runtime configuration for the engine, read from the environment.
pub struct Config {
    /// Connection string for the tournament database.
    pub database_url: String,
}

impl Config {
    /// Reads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
