use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::provider::openweather::DEFAULT_BASE_URL;

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "CITYWEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "https://api.openweathermap.org/data/2.5"
/// timeout_secs = 10
/// initial_loading = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeatherMap API key.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout. Absent means requests are never cut short.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Start in the loading state before the first query.
    #[serde(default)]
    pub initial_loading: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: None,
            initial_loading: false,
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// API key from the environment if set, otherwise from the file.
    pub fn resolved_api_key(&self) -> Option<String> {
        Self::pick_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    fn pick_api_key(env: Option<String>, stored: Option<&str>) -> Option<String> {
        env.filter(|k| !k.trim().is_empty())
            .or_else(|| stored.filter(|k| !k.trim().is_empty()).map(str::to_owned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_openweather() {
        let cfg = Config::default();

        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert!(cfg.api_key.is_none());
        assert!(cfg.timeout_secs.is_none());
        assert!(!cfg.initial_loading);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = Config::from_toml("").expect("empty file is valid");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn toml_fields_are_read() {
        let cfg = Config::from_toml(
            r#"
            api_key = "OPEN_KEY"
            base_url = "http://localhost:8080"
            timeout_secs = 7
            initial_loading = true
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.api_key.as_deref(), Some("OPEN_KEY"));
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.timeout_secs, Some(7));
        assert!(cfg.initial_loading);
    }

    #[test]
    fn toml_roundtrip_keeps_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("OPEN_KEY".into());

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back = Config::from_toml(&text).unwrap();

        assert_eq!(back.api_key.as_deref(), Some("OPEN_KEY"));
    }

    #[test]
    fn env_key_wins_over_stored_key() {
        let picked = Config::pick_api_key(Some("ENV".into()), Some("FILE"));
        assert_eq!(picked.as_deref(), Some("ENV"));
    }

    #[test]
    fn blank_keys_are_ignored() {
        let picked = Config::pick_api_key(Some("  ".into()), Some("FILE"));
        assert_eq!(picked.as_deref(), Some("FILE"));
        assert!(Config::pick_api_key(None, Some("")).is_none());
        assert!(Config::pick_api_key(None, None).is_none());
    }
}
