//! Backend configuration and injected user preferences.
//!
//! DESIGN
//! ======
//! The hosted platform is addressed by a base URL plus a publishable anon
//! key, loaded once from the environment. User-facing preferences (cursor,
//! display name, dark mode) are an explicit value constructed by the host
//! and passed down — nothing in this crate reads ambient global state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {var}")]
    MissingVar { var: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for BackendTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

/// Connection settings for the hosted backend platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Platform base URL, stored without a trailing slash.
    pub base_url: String,
    /// Publishable anon key sent with every request.
    pub anon_key: String,
    pub timeouts: BackendTimeouts,
}

impl BackendConfig {
    #[must_use]
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.to_owned(),
            timeouts: BackendTimeouts::default(),
        }
    }

    /// Build backend config from environment variables.
    ///
    /// Required:
    /// - `ZYMATRIC_BACKEND_URL`
    /// - `ZYMATRIC_BACKEND_ANON_KEY`
    ///
    /// Optional:
    /// - `ZYMATRIC_REQUEST_TIMEOUT_SECS`: default 30
    /// - `ZYMATRIC_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = require_var("ZYMATRIC_BACKEND_URL")?;
        let anon_key = require_var("ZYMATRIC_BACKEND_ANON_KEY")?;
        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("ZYMATRIC_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("ZYMATRIC_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        let mut config = Self::new(&base_url, &anon_key);
        config.timeouts = timeouts;
        Ok(config)
    }
}

fn require_var(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingVar { var: key.to_owned() })
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

/// Pointer style applied across the site by the cursor customizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
    Crosshair,
    Text,
    Move,
}

impl CursorStyle {
    /// CSS `cursor` property value for this style.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::Crosshair => "crosshair",
            Self::Text => "text",
            Self::Move => "move",
        }
    }

    /// Parse a CSS cursor name back into a style.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "pointer" => Some(Self::Pointer),
            "crosshair" => Some(Self::Crosshair),
            "text" => Some(Self::Text),
            "move" => Some(Self::Move),
            _ => None,
        }
    }
}

/// User preferences injected at construction time. Hosts that persist them
/// do so on their side; serde round-trips keep the stored shape stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub cursor: CursorStyle,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub dark_mode: bool,
}
