//! Configuration for Parley.
//!
//! Loads settings from `$XDG_CONFIG_HOME/parley/config.toml` or uses defaults.
//! Every field has a serde default, so partial files are fine.

use crate::error::ParleyError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Config file name under the user config dir
pub const CONFIG_FILE: &str = "parley/config.toml";

/// Default simulated search latency
pub const DEFAULT_STUB_LATENCY_MS: u64 = 1_000;

/// How long the front end waits before asking for a reply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResponseSpeed {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl ResponseSpeed {
    /// Unknown names fall back to normal
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "fast" => Self::Fast,
            "slow" => Self::Slow,
            _ => Self::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Normal => "normal",
            Self::Slow => "slow",
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            Self::Fast => Duration::from_millis(500),
            Self::Normal => Duration::from_millis(1_500),
            Self::Slow => Duration::from_millis(3_000),
        }
    }
}

impl From<String> for ResponseSpeed {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<ResponseSpeed> for String {
    fn from(speed: ResponseSpeed) -> Self {
        speed.as_str().to_string()
    }
}

impl std::fmt::Display for ResponseSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display settings consumed by the chat front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Name shown next to bot replies
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Delay before the reply is requested
    #[serde(default)]
    pub response_speed: ResponseSpeed,

    /// Show a clock time next to each message
    #[serde(default = "default_true")]
    pub show_timestamps: bool,

    /// Show a typing indicator while waiting
    #[serde(default = "default_true")]
    pub show_typing_indicator: bool,
}

fn default_bot_name() -> String {
    "AI Assistant".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            response_speed: ResponseSpeed::default(),
            show_timestamps: true,
            show_typing_indicator: true,
        }
    }
}

/// Which search provider backs the search stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchProviderKind {
    /// Canned results, no network access
    #[default]
    Stub,
    /// Live instant-answer API
    Http,
}

/// Search stage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub provider: SearchProviderKind,

    /// Simulated latency for the stub provider
    #[serde(default = "default_stub_latency")]
    pub stub_latency_ms: u64,

    /// Instant-answer endpoint for the http provider
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout for the http provider
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_stub_latency() -> u64 {
    DEFAULT_STUB_LATENCY_MS
}

fn default_endpoint() -> String {
    "https://api.duckduckgo.com/".to_string()
}

fn default_timeout() -> u64 {
    5
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: SearchProviderKind::default(),
            stub_latency_ms: default_stub_latency(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Response pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub search: SearchConfig,
}

/// Top-level config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub chat: ChatSettings,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl ParleyConfig {
    /// `$XDG_CONFIG_HOME/parley/config.toml`, if a config dir exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Load from a file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, ParleyError> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ParleyError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ParleyError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ParleyError> {
        if self.chat.bot_name.trim().is_empty() {
            return Err(ParleyError::Config("chat.bot_name must not be empty".to_string()));
        }
        if self.pipeline.search.timeout_secs == 0 {
            return Err(ParleyError::Config(
                "pipeline.search.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.pipeline.search.provider == SearchProviderKind::Http
            && !self.pipeline.search.endpoint.starts_with("http")
        {
            return Err(ParleyError::Config(format!(
                "pipeline.search.endpoint is not an http(s) URL: {}",
                self.pipeline.search.endpoint
            )));
        }
        Ok(())
    }
}
