use serde::Deserialize;

use crate::error::ConfigError;

/// Port the listener binds when `PORT` is not set.
const DEFAULT_PORT: u16 = 8080;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// TCP port the HTTP listener binds on (default: 8080)
    pub port: u16,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = port_from_env(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }
}

/// Resolve the listen port from a raw `PORT` value.
///
/// Unset and empty both fall back to the default; anything else must parse
/// as a `u16`.
fn port_from_env(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(port_from_env(None).unwrap(), 8080);
    }

    #[test]
    fn test_port_defaults_when_empty() {
        assert_eq!(port_from_env(Some("")).unwrap(), 8080);
    }

    #[test]
    fn test_port_override() {
        assert_eq!(port_from_env(Some("9090")).unwrap(), 9090);
    }

    #[test]
    fn test_non_numeric_port_rejected() {
        assert!(port_from_env(Some("eighty-eighty")).is_err());
    }

    #[test]
    fn test_out_of_range_port_rejected() {
        assert!(port_from_env(Some("70000")).is_err());
    }
}
