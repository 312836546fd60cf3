//! AutoDiag configuration.
//!
//! Config file: ~/.config/autodiag/config.toml or /etc/autodiag/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::LanguageCode;

/// LLM endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the completion service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name passed to the service
    #[serde(default = "default_model")]
    pub model: String,

    /// Bearer token for OpenAI-compatible endpoints.
    /// AUTODIAG_API_KEY overrides this at load time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// HTTP timeout for one diagnosis call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Main AutoDiag configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutodiagConfig {
    /// UI language when --lang is not given (two-letter code)
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default)]
    pub llm: LlmConfig,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for AutodiagConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            llm: LlmConfig::default(),
        }
    }
}

impl AutodiagConfig {
    /// Get default user config path: ~/.config/autodiag/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("XDG_CONFIG_HOME"))
            .context("Cannot determine home directory")?;

        let config_dir = if home.contains("/.config") {
            PathBuf::from(home)
        } else {
            Path::new(&home).join(".config")
        };

        Ok(config_dir.join("autodiag").join("config.toml"))
    }

    /// Get system config path: /etc/autodiag/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/autodiag/config.toml")
    }

    /// Load configuration.
    ///
    /// Priority:
    /// 1. User config (~/.config/autodiag/config.toml)
    /// 2. System config (/etc/autodiag/config.toml)
    /// 3. Defaults
    ///
    /// AUTODIAG_API_KEY overrides the api_key from any source.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_files()?;

        if let Ok(key) = std::env::var("AUTODIAG_API_KEY") {
            if !key.is_empty() {
                config.llm.api_key = Some(key);
            }
        }

        Ok(config)
    }

    fn load_from_files() -> Result<Self> {
        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: AutodiagConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the user config file.
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        fs::write(&path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    /// Resolve the configured default language, falling back to English on
    /// an unrecognized code.
    pub fn language(&self) -> LanguageCode {
        LanguageCode::from_code(&self.default_language).unwrap_or(LanguageCode::En)
    }
}
