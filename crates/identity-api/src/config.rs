//! Server configuration read from the environment.

use std::net::SocketAddr;

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Config {
    /// Reads `HOST` (default `0.0.0.0`) and `PORT` (default `3000`).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        Ok(Self { host, port })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_invalid_port_is_a_config_error() {
        let result = Config::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));

        match result.unwrap_err() {
            AppError::Config(msg) => assert!(msg.starts_with("PORT must be a valid u16")),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_host_is_a_config_error() {
        let config = Config {
            host: "not a host".to_string(),
            port: 8080,
        };

        assert!(matches!(config.socket_addr(), Err(AppError::Config(_))));
    }
}
