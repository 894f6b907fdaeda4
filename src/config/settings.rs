//! Application settings management

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{RecapError, Result};

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Local summarization settings
    #[serde(default)]
    pub summary: SummarySettings,

    /// Remote LLM settings
    #[serde(default)]
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Transcript language (english, french, german, spanish, portuguese, italian)
    #[serde(default = "default_language")]
    pub language: String,

    /// Fraction of the transcript sentences to keep (0.0-1.0)
    #[serde(default = "default_ratio")]
    pub ratio: f64,

    /// Ranking engine (centrality, latent, frequency)
    #[serde(default = "default_engine")]
    pub engine: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Remote provider (lmstudio)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// Chat-completion endpoint URL (empty = provider default)
    #[serde(default)]
    pub api_url: String,

    /// Model name sent in requests
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Completion token cap (-1 = unlimited)
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_language() -> String {
    "english".to_string()
}

fn default_ratio() -> f64 {
    0.2
}

fn default_engine() -> String {
    "centrality".to_string()
}

fn default_llm_provider() -> String {
    "lmstudio".to_string()
}

fn default_llm_model() -> String {
    "localhost".to_string()
}

fn default_temperature() -> f64 {
    0.3
}

fn default_max_tokens() -> i64 {
    -1
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            ratio: default_ratio(),
            engine: default_engine(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_url: String::new(),
            model: default_llm_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            summary: SummarySettings::default(),
            llm: LlmSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            RecapError::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let mut settings: Settings = toml::from_str(&content).map_err(|e| {
            RecapError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.llm.api_url.trim().is_empty() {
            if let Ok(url) = std::env::var("RECAP_API_URL") {
                if !url.trim().is_empty() {
                    self.llm.api_url = url;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "recap", "recap")
            .ok_or_else(|| RecapError::Config("Could not determine config directory".to_string()))?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)
            .map_err(|e| RecapError::Config(format!("Failed to render default config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RecapError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        std::fs::write(path, content).map_err(|e| {
            RecapError::Config(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_centrality_engine() {
        let settings = Settings::default();

        assert_eq!(settings.summary.engine, "centrality");
        assert_eq!(settings.summary.language, "english");
        assert_eq!(settings.llm.provider, "lmstudio");
    }

    #[test]
    fn partial_config_backfills_defaults() {
        let settings: Settings = toml::from_str("[summary]\nratio = 0.5\n").unwrap();

        assert_eq!(settings.summary.ratio, 0.5);
        assert_eq!(settings.summary.engine, "centrality");
        assert_eq!(settings.llm.max_tokens, -1);
        assert_eq!(settings.llm.timeout_secs, 300);
    }
}
