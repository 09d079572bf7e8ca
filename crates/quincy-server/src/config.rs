//! Configuration file parsing for the triage server.
//!
//! Loads settings from TOML files: bind address, model name, and the
//! directory mock telemetry files are served from. The Gemini credential
//! deliberately does NOT live here; it comes from the environment at
//! startup (see the crate root).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 3000)
    pub bind_port: u16,

    /// Gemini model name (default: "gemini-2.5-flash")
    #[serde(default = "default_model")]
    pub model: String,

    /// Directory mock telemetry files are read from (default: ".")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_model() -> String {
    quincy_llm::gemini::DEFAULT_MODEL.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 3000,
            model: default_model(),
            data_dir: default_data_dir(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
