//! Application configuration module.
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `CHATDECK`
//! prefix and `__` (double underscore) separating nested keys:
//!
//! - `CHATDECK__SERVER__PORT=8080` -> `server.port = 8080`
//! - `CHATDECK__EMAIL__FROM_EMAIL=...` -> `email.from_email = ...`

mod bridge;
mod email;
mod error;
mod server;

pub use bridge::BridgeConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment).
    #[serde(default)]
    pub server: ServerConfig,

    /// Email notification configuration.
    #[serde(default)]
    pub email: EmailConfig,

    /// IM bridge configuration.
    #[serde(default)]
    pub bridge: BridgeConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Reads a `.env` file first when present (development convenience),
    /// then deserializes the `CHATDECK`-prefixed environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHATDECK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.server.validate()?;
        self.email.validate()?;
        self.bridge.validate()?;
        Ok(())
    }

    /// Checks if running in production.
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
