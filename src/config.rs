// src/config.rs
use serde::Deserialize;
use std::path::Path;

use crate::errors::{ProbeError, Result};

pub const DEFAULT_API_BASE: &str = "https://dashscope.aliyuncs.com";
pub const DEFAULT_PROMPT: &str = "Hello, please briefly introduce yourself.";

/// The three values a probe needs. Lives just long enough for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub api_key: String,
    pub app_id: String,
    pub prompt: String,
}

/// High-level application configuration loaded from a TOML file and environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub probe: ProbeConfig,
}

/// On-disk form pointed to by `PROBE_CONFIG`. Every key is optional; the environment wins.
#[derive(Deserialize, Debug, Default)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub app_id: Option<String>,
    pub prompt: Option<String>,
    pub api_base: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with variable lookup supplied by the caller.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match lookup("PROBE_CONFIG") {
            Some(path) if !path.trim().is_empty() => FileConfig::from_file(path.trim())?,
            _ => FileConfig::default(),
        };

        let pick = |var: &str, from_file: Option<String>| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .or(from_file.filter(|v| !v.trim().is_empty()))
        };

        let api_key = pick("DASHSCOPE_API_KEY", file.api_key).ok_or_else(|| {
            ProbeError::Config(
                "No API key configured. Please set DASHSCOPE_API_KEY.".to_string(),
            )
        })?;
        let app_id = pick("DASHSCOPE_APP_ID", file.app_id).ok_or_else(|| {
            ProbeError::Config(
                "No application id configured. Please set DASHSCOPE_APP_ID.".to_string(),
            )
        })?;
        let prompt =
            pick("PROBE_PROMPT", file.prompt).unwrap_or_else(|| DEFAULT_PROMPT.to_string());
        let api_base =
            pick("DASHSCOPE_API_BASE", file.api_base).unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(AppConfig {
            api_base: api_base.trim().to_string(),
            probe: ProbeConfig {
                api_key: api_key.trim().to_string(),
                app_id: app_id.trim().to_string(),
                prompt,
            },
        })
    }
}
