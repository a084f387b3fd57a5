//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::error::Error;
use crate::lenta::TransportConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Authentication cookie for the catalog gateway
    #[serde(default)]
    pub cookie: String,

    /// Proxy URL (e.g., http://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Maximum number of items to request
    #[serde(default)]
    pub limit: Option<u32>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Custom API origin, mainly for testing
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("lenta-parser").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(cookie) = std::env::var("LENTA_COOKIE") {
            self.cookie = cookie;
        }

        if let Ok(proxy) = std::env::var("PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(limit) = std::env::var("LIMIT") {
            if let Some(l) = parse_limit(&limit) {
                self.limit = Some(l);
            }
        }

        self
    }

    /// Rejects a missing or blank cookie.
    pub fn validate(&self) -> std::result::Result<(), Error> {
        if self.cookie.trim().is_empty() {
            return Err(Error::Config("LENTA_COOKIE is not set".to_string()));
        }
        Ok(())
    }

    /// Settings handed to the HTTP transport.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig { cookie: self.cookie.trim().to_string(), proxy: self.proxy.clone() }
    }
}

/// Parses a result limit, ignoring surrounding whitespace. Unparsable input yields `None`.
pub fn parse_limit(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: text, json, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
