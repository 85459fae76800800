//! Configuration management for the Contact Manager.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Configuration for the Contact Manager server and API client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (default: "0.0.0.0")
    pub host: String,

    /// Port the HTTP server listens on (default: 5000)
    pub port: u16,

    /// Browser origin allowed by CORS (default: "http://localhost:5173")
    pub client_url: String,

    /// SQLite database file; `None` keeps contacts in memory
    pub database_path: Option<String>,

    /// Base URL used by the API client (default: "http://localhost:5000/api")
    pub api_url: String,

    /// HTTP request timeout in seconds for the API client (default: 10)
    pub request_timeout: u64,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HOST`: Bind address (default: 0.0.0.0)
    /// - `PORT`: Bind port (default: 5000)
    /// - `CLIENT_URL`: Allowed CORS origin (default: http://localhost:5173)
    /// - `CONTACTS_DB_PATH`: SQLite file path (default: in-memory store)
    /// - `CONTACT_API_URL`: API client base URL (default: http://localhost:5000/api)
    /// - `REQUEST_TIMEOUT`: API client timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = Self::parse_env_u16("PORT", defaults.port)?;

        let client_url = env::var("CLIENT_URL").unwrap_or(defaults.client_url);
        Self::require_http_url("CLIENT_URL", &client_url)?;

        let api_url = env::var("CONTACT_API_URL").unwrap_or(defaults.api_url);
        Self::require_http_url("CONTACT_API_URL", &api_url)?;

        let database_path = env::var("CONTACTS_DB_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        let config = Config {
            host,
            port,
            client_url,
            database_path,
            api_url,
            request_timeout,
            log_level,
        };
        config.socket_addr()?;
        Ok(config)
    }

    /// The socket address the server should bind to.
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                var: "HOST".to_string(),
                reason: format!("Not a valid bind address ({}): {}", self.host, e),
            })
    }

    fn require_http_url(var_name: &str, value: &str) -> ConfigResult<()> {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 5000,
            client_url: "http://localhost:5173".to_string(),
            database_path: None,
            api_url: "http://localhost:5000/api".to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
