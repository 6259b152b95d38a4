// ⚙️ Runtime configuration - read once from the environment at startup
//
//   BANK_HOST         bind host              (default 0.0.0.0)
//   BANK_PORT         bind port              (default 9000)
//   BANK_CORS_ORIGIN  allowed browser origin (default http://localhost:3000)
//   BANK_SYNC_POLICY  always | latch         (default always)

use crate::sync::SyncPolicy;
use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub sync_policy: SyncPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            sync_policy: SyncPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key → value source (unset keys fall back to defaults)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("BANK_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "BANK_PORT".to_string(),
                message: e.to_string(),
            })?,
            None => defaults.port,
        };

        let sync_policy = match lookup("BANK_SYNC_POLICY") {
            Some(raw) => raw.parse::<SyncPolicy>().map_err(|message| ConfigError::InvalidValue {
                key: "BANK_SYNC_POLICY".to_string(),
                message,
            })?,
            None => defaults.sync_policy,
        };

        Ok(Config {
            host: lookup("BANK_HOST").unwrap_or(defaults.host),
            port,
            cors_origin: lookup("BANK_CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            sync_policy,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
