use thiserror::Error;

/// Errors raised while reading engine configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is missing or not unicode.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
