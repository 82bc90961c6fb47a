//! Environment configuration for the Holocron server.

use dioxus_logger::tracing::Level;

use crate::server::error::{config::ConfigError, Error};

/// Database used when `DATABASE_URL` is not set.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
/// Address the server binds to when `HOST` is not set.
pub static DEFAULT_HOST: &str = "0.0.0.0";
/// Port the server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration read from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Connection string for the relational store
    pub database_url: String,
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Maximum log level
    pub log_level: Level,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults for unset variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded
    /// - `Err(Error::ConfigError)` - A variable is set but its value cannot be parsed
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            database_url,
            host,
            port,
            log_level,
        })
    }

    /// Socket address string the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
