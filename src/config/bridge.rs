//! IM bridge configuration.

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Configuration for the IM bridge used by Signal-type chats.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Whether bridge forwarding is enabled at all.
    #[serde(default)]
    pub enabled: bool,

    /// Endpoint of the bridge daemon.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl BridgeConfig {
    /// Validates bridge configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.enabled && !self.endpoint.starts_with("http") {
            return Err(ConfigValidationError::InvalidBridgeEndpoint);
        }
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8090".to_string()
}
