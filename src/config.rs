//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::whisper::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Serve synthetic results instead of scraping upstream.
    #[serde(default)]
    pub demo_mode: bool,

    /// Upstream base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Address the HTTP service binds to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Upstream request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum redirects followed per upstream request.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User agent presented to the upstream site.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_bind() -> String {
    "127.0.0.1:8787".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_redirects() -> usize {
    5
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; MTG-Price-Calculator/1.0)".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            base_url: default_base_url(),
            bind: default_bind(),
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
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
            let xdg_config = config_dir.join("whisper-price").join("config.toml");
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
        if let Ok(demo) = std::env::var("DEMO_MODE") {
            self.demo_mode = demo.eq_ignore_ascii_case("true") || demo == "1";
        }

        if let Ok(base_url) = std::env::var("WHISPER_BASE_URL") {
            self.base_url = base_url;
        }

        if let Ok(bind) = std::env::var("WHISPER_BIND") {
            self.bind = bind;
        }

        self
    }
}
