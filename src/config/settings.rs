//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables checked, in order, for the Gemini API key.
const API_KEY_ENV_VARS: [&str; 2] = ["GOOGLE_API_KEY", "MEETING_ASSISTANT_API_KEY"];

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (empty = provider default)
    #[serde(default)]
    pub endpoint: String,

    /// Sampling temperature
    #[serde(default)]
    pub temperature: f32,

    /// Request timeout in seconds (0 = no timeout)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            temperature: 0.0,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        let mut settings = Self::load_from(&config_path)?;
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Load settings from an explicit path, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if !self.llm.api_key.trim().is_empty() {
            return;
        }

        let key = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|key| !key.trim().is_empty());

        if let Some(key) = key {
            self.llm.api_key = key;
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "meeting-assistant", "meeting-assistant")
            .context("Could not determine config directory")?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default log filter when RUST_LOG is unset; `--verbose` forces debug.
    pub fn log_directive(&self, verbose: bool) -> &str {
        if verbose {
            return "debug";
        }

        match self.general.log_level.trim() {
            "" => "info",
            level => level,
        }
    }

    /// Socket address string for the HTTP server
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
