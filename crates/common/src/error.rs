use thiserror::Error;

/// Errors raised while loading service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid TCP port number, got {value:?}")]
    InvalidPort { value: String },
}
