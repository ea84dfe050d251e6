use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "study-log-tui";
const API_URL_ENV: &str = "STUDY_LOG_API_URL";
const API_KEY_ENV: &str = "STUDY_LOG_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyLogConfig {
    /// Base URL of the hosted backend, e.g. "https://xyz.supabase.co"
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Anon/service key sent as `apikey` and bearer token
    #[serde(default)]
    pub api_key: String,

    /// Target shown next to the running total
    #[serde(default = "default_goal_hours")]
    pub goal_hours: i64,
}

fn default_api_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_goal_hours() -> i64 {
    1000
}

impl Default for StudyLogConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            goal_hours: default_goal_hours(),
        }
    }
}

impl StudyLogConfig {
    fn root_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("study-log.log"))
    }

    /// Load config from disk, then apply environment overrides.
    /// Returns the default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            Self::from_toml(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_key = key;
        }
    }

    /// Write the default config if none exists yet. Returns the path.
    pub fn ensure_default_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save()?;
        }
        Ok(path)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }
}
