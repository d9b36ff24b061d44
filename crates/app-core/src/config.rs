//! Application configuration
//!
//! Configuration is plain serde data with defaults for every field, so a
//! partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::auth::DEFAULT_STUB_DELAY;
use crate::validation::ValidationConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed configuration document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Default bound on a single authentication attempt
pub const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_secs(15);

/// Login flow settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginConfig {
    /// Upper bound on one authentication attempt, in milliseconds
    pub auth_timeout_ms: u64,
    /// Latency of the stub authenticator, in milliseconds
    pub stub_delay_ms: u64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            auth_timeout_ms: DEFAULT_AUTH_TIMEOUT.as_millis() as u64,
            stub_delay_ms: DEFAULT_STUB_DELAY.as_millis() as u64,
        }
    }
}

impl LoginConfig {
    /// Authentication timeout
    pub fn auth_timeout(&self) -> Duration {
        Duration::from_millis(self.auth_timeout_ms)
    }

    /// Stub authenticator delay
    pub fn stub_delay(&self) -> Duration {
        Duration::from_millis(self.stub_delay_ms)
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Login flow settings
    pub login: LoginConfig,
    /// Form validation rules
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the login form unusable
    pub fn validate(&self) -> Result<()> {
        if self.login.auth_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "login.authTimeoutMs",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.login.stub_delay_ms >= self.login.auth_timeout_ms {
            tracing::warn!(
                stub_delay_ms = self.login.stub_delay_ms,
                auth_timeout_ms = self.login.auth_timeout_ms,
                "stub delay exceeds auth timeout; every stubbed login will time out"
            );
        }
        Ok(())
    }
}
