//! Email notification configuration.

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Email configuration for message update notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// From email address.
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl EmailConfig {
    /// Gets the formatted "From" header value.
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validates email configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.from_email.contains('@') {
            return Err(ConfigValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@chatdeck.dev".to_string()
}

fn default_from_name() -> String {
    "Chatdeck".to_string()
}
