//! Server configuration
//!
//! Read from shuttle secrets, falling back to the process environment
//! (which `dotenvy` may have populated from a local `.env`).

use thiserror::Error;

const API_PREFIX_KEY: &str = "ROSTER_API_PREFIX";
const REQUEST_LOG_KEY: &str = "ROSTER_REQUEST_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ROSTER_API_PREFIX must start with '/': {0}")]
    InvalidPrefix(String),

    #[error("{key} must be true or false: {value}")]
    InvalidFlag { key: &'static str, value: String },
}

/// Runtime settings for the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path prefix of the roster routes; `/` mounts them at the root
    pub api_prefix: String,
    /// Emit a trace span per HTTP request
    pub request_log: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/api".to_string(),
            request_log: true,
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }

    /// Build from any key lookup; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(prefix) = lookup(API_PREFIX_KEY) {
            let prefix = prefix.trim();
            if !prefix.starts_with('/') {
                return Err(ConfigError::InvalidPrefix(prefix.to_string()));
            }
            let trimmed = prefix.trim_end_matches('/');
            config.api_prefix = if trimmed.is_empty() {
                "/".to_string()
            } else {
                trimmed.to_string()
            };
        }

        if let Some(flag) = lookup(REQUEST_LOG_KEY) {
            config.request_log = match flag.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        key: REQUEST_LOG_KEY,
                        value: flag,
                    })
                }
            };
        }

        Ok(config)
    }
}
