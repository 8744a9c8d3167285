//! Configuration management for Connectify.
//!
//! Both binaries read their settings from environment variables, optionally
//! seeded from a `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the server and the terminal client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the server binds to (default: "0.0.0.0")
    pub host: String,

    /// Port the server listens on (default: 5000)
    pub port: u16,

    /// Origin allowed to call the API cross-origin
    pub frontend_url: String,

    /// Contacts collection URL used by the client
    pub api_url: String,

    /// JSON document backing the store; in-memory when unset
    pub data_file: Option<PathBuf>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `HOST`: bind address (default: 0.0.0.0)
    /// - `PORT`: listening port (default: 5000)
    /// - `FRONTEND_URL`: CORS origin (default: http://localhost:5173)
    /// - `API_URL`: contacts collection URL (default: http://localhost:5000/api/contacts)
    /// - `CONTACTS_DATA_FILE`: JSON document path (default: in-memory store)
    /// - `REQUEST_TIMEOUT`: client timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = Self::parse_env_u16("PORT", defaults.port)?;

        let frontend_url = env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url);
        Self::require_http_url("FRONTEND_URL", &frontend_url)?;

        let api_url = env::var("API_URL").unwrap_or(defaults.api_url);
        Self::require_http_url("API_URL", &api_url)?;

        let data_file = env::var("CONTACTS_DATA_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            host,
            port,
            frontend_url,
            api_url,
            data_file,
            request_timeout,
            log_level,
        })
    }

    /// Socket address the server should bind.
    pub fn bind_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                var: "HOST".to_string(),
                reason: format!("not a bindable address: {}", e),
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
                reason: format!("Must be a port number between 0-65535, got: {}", val),
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
            frontend_url: "http://localhost:5173".to_string(),
            api_url: "http://localhost:5000/api/contacts".to_string(),
            data_file: None,
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
