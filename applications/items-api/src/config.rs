use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults suitable for local development.
    pub fn from_env() -> Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid SERVER_PORT: {}", raw))?,
            Err(_) => 3000,
        };

        Ok(Config {
            server: ServerConfig { host, port },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
        };

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn from_env_uses_defaults_and_overrides() {
        env::remove_var("SERVER_HOST");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);

        env::set_var("SERVER_HOST", "localhost");
        env::set_var("SERVER_PORT", "9000");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 9000);

        env::set_var("SERVER_PORT", "not-a-port");
        assert!(Config::from_env().is_err());

        env::remove_var("SERVER_HOST");
        env::remove_var("SERVER_PORT");
    }
}
