//! Service configuration
//!
//! Loaded from an optional JSON file, then overridden by `NARRATOR_*`
//! environment variables. Every section has usable defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::FulfillmentError;
use crate::types::DEFAULT_PLAYERS;

pub const ENV_HOST: &str = "NARRATOR_HOST";
pub const ENV_PORT: &str = "NARRATOR_PORT";
pub const ENV_LOG: &str = "NARRATOR_LOG";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub fulfillment: FulfillmentConfig,
    pub logging: LoggingConfig,
}

/// Where the HTTP endpoint listens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// How webhook requests are interpreted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FulfillmentConfig {
    /// Request `source` identifying the voice-assistant channel
    pub voice_source: String,
    /// Player count used when the request has none
    pub default_players: u32,
}

impl Default for FulfillmentConfig {
    fn default() -> Self {
        Self {
            voice_source: "google".to_string(),
            default_players: DEFAULT_PLAYERS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, FulfillmentError> {
        serde_json::from_str(json)
            .map_err(|e| FulfillmentError::config(format!("invalid config JSON: {e}")))
    }

    /// Read a JSON config file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, FulfillmentError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            FulfillmentError::io(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Apply `NARRATOR_*` overrides from the process environment
    pub fn apply_env(self) -> Result<Self, FulfillmentError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup; split out so tests need not touch
    /// the real environment
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, FulfillmentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| FulfillmentError::config(format!("invalid {ENV_PORT} '{port}'")))?;
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.logging.level = LevelFilter::from_str(level.trim())
                .map_err(|_| FulfillmentError::config(format!("invalid {ENV_LOG} '{level}'")))?;
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
