//! Application configuration structs
//!
//! Loads configuration from environment variables (with optional .env file),
//! layered through the `config` crate. Nested fields map to double-underscore
//! variables, e.g. `EVENTS__REQUEST_TIMEOUT_MS`.

use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub events: EventConfig,
    #[serde(default)]
    pub lock: LockConfig,
    #[serde(default)]
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: Environment::default(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Cross-context event settings
#[derive(Debug, Clone, Deserialize)]
pub struct EventConfig {
    /// How long a requester waits on the correlation store before falling
    /// back to its default value
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl EventConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Keyed-lock settings
#[derive(Debug, Clone, Deserialize)]
pub struct LockConfig {
    /// TTL for the per-post view-count lock
    #[serde(default = "default_view_count_ttl_secs")]
    pub view_count_ttl_secs: u64,
}

impl LockConfig {
    #[must_use]
    pub fn view_count_ttl(&self) -> Duration {
        Duration::from_secs(self.view_count_ttl_secs)
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            view_count_ttl_secs: default_view_count_ttl_secs(),
        }
    }
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "board-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_request_timeout_ms() -> u64 {
    2000
}

fn default_view_count_ttl_secs() -> u64 {
    5
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Nested sections use a `__` separator (`EVENTS__REQUEST_TIMEOUT_MS`,
    /// `LOCK__VIEW_COUNT_TTL_SECS`, `SNOWFLAKE__WORKER_ID`, `APP__ENV`).
    ///
    /// # Errors
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            events: EventConfig::default(),
            lock: LockConfig::default(),
            snowflake: SnowflakeConfig::default(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
