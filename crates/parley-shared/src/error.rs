//! Error types for Parley.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParleyError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
