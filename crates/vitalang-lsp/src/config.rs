//! Server settings sent by the client in `initializationOptions`

use serde::Deserialize;
use thiserror::Error;

/// Settings controlling optional server behaviour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    /// Ask the client to reopen suggestions after a typed letter
    pub auto_trigger: bool,
    /// Mirror debug messages to the client's log
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            auto_trigger: true,
            debug: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid initialization options: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl ServerConfig {
    /// Parse initialization options; absent or `null` options give the defaults
    pub fn from_initialization_options(
        options: Option<&serde_json::Value>,
    ) -> Result<Self, ConfigError> {
        match options {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => Ok(Self::deserialize(value)?),
        }
    }
}
