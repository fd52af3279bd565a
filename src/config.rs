use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_URL_ENV: &str = "VOYAGE_API_URL";

const MIN_DEBOUNCE_MS: u64 = 50;
const MAX_DEBOUNCE_MS: u64 = 2000;
const MIN_REQUEST_TIMEOUT_MS: u64 = 250;
const MAX_REQUEST_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub debounce_ms: u64,
    pub request_timeout_ms: u64,
    pub cache_enabled: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            debounce_ms: 300,
            request_timeout_ms: 5000,
            cache_enabled: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Config file, then `VOYAGE_API_URL`.
    ///
    /// Never fails: a broken file falls back to defaults and the problem is
    /// handed back so it can be logged once logging is up.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        let loaded = get_config_dir().map(|dir| Self::load_from(&dir.join("config.toml")));
        let (mut config, problem) = match loaded {
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (Self::default(), Some(e)),
            None => (Self::default(), None),
        };
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(&url);
        }
        (config, problem)
    }

    /// A missing file is not an error and yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    fn apply_api_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.api_base_url = url.to_string();
        }
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.clamp(MIN_DEBOUNCE_MS, MAX_DEBOUNCE_MS))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let ms = self
            .request_timeout_ms
            .clamp(MIN_REQUEST_TIMEOUT_MS, MAX_REQUEST_TIMEOUT_MS);
        Duration::from_millis(ms)
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("voyage");
        path
    })
}
