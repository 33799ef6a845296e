use thiserror::Error;

/// Errors that can occur while loading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but could not be parsed.
    #[error("Invalid environment variable: {0}")]
    InvalidEnvVar(String),
}
