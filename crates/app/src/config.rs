//! Dashboard configuration — TOML block with per-key string overrides.
//!
//! Every field has a sensible default so configuration is optional. The host
//! page may embed a TOML document; individual keys can then be overridden
//! with plain strings (the browser adapter reads them from `<meta>` tags).
//! Overrides take precedence over the TOML values.

use serde::Deserialize;

/// Keys accepted by [`DashboardConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 4] = ["status-url", "logs-url", "poll-interval-ms", "log-limit"];

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Endpoint returning the status snapshot.
    pub status_url: String,
    /// Endpoint returning the log snapshot.
    pub logs_url: String,
    /// Delay between two ticks, in milliseconds.
    pub poll_interval_ms: u32,
    /// Maximum number of log rows rendered.
    pub log_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            status_url: "/api/status".to_string(),
            logs_url: "/api/logs".to_string(),
            poll_interval_ms: 2000,
            log_limit: 20,
        }
    }
}

impl DashboardConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Override a single setting from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] for keys outside
    /// [`OVERRIDE_KEYS`] and [`ConfigError::InvalidValue`]
    /// when a numeric value does not parse. The configuration is unchanged
    /// on error.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "status-url" => self.status_url = value.to_string(),
            "logs-url" => self.logs_url = value.to_string(),
            "poll-interval-ms" => self.poll_interval_ms = value.parse().map_err(|_| invalid())?,
            "log-limit" => self.log_limit = value.parse().map_err(|_| invalid())?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Check semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for empty endpoints, a zero poll
    /// interval or a zero log limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.status_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "status_url must not be empty".to_string(),
            ));
        }
        if self.logs_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logs_url must not be empty".to_string(),
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll_interval_ms must be non-zero".to_string(),
            ));
        }
        if self.log_limit == 0 {
            return Err(ConfigError::Validation(
                "log_limit must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config block")]
    Parse(#[from] toml::de::Error),
    /// Override for a key that does not exist.
    #[error("unknown config key: {0}")]
    UnknownKey(String),
    /// Override value of the wrong type.
    #[error("invalid value {value:?} for config key {key}")]
    InvalidValue { key: String, value: String },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
