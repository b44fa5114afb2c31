//! Application configuration.

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Base URLs for the backend, persisted across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data API base URL.
    pub api_base: String,
    /// Session provider base URL.
    pub oauth_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8080/api".to_string(),
            oauth_base: "http://localhost:8080/oauth2".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the settings file, then applies env
    /// overrides (`DRAFTDECK_API_BASE`, `DRAFTDECK_OAUTH_BASE`).
    ///
    /// # Errors
    ///
    /// Returns an error when the settings file exists but cannot be read or
    /// parsed.
    pub fn load() -> anyhow::Result<Self> {
        let path = settings_path();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("parsing {}", path.display()))?
        } else {
            Self::default()
        };
        if let Ok(value) = std::env::var("DRAFTDECK_API_BASE") {
            config.api_base = value;
        }
        if let Ok(value) = std::env::var("DRAFTDECK_OAUTH_BASE") {
            config.oauth_base = value;
        }
        Ok(config)
    }
}

fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("draftdeck")
        .join("settings.json")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_settings_json() {
        let config: AppConfig = serde_json::from_str(
            r#"{"api_base":"https://mail.example.com/api","oauth_base":"https://mail.example.com/oauth2"}"#,
        )
        .unwrap();
        assert_eq!(config.api_base, "https://mail.example.com/api");
        assert_eq!(config.oauth_base, "https://mail.example.com/oauth2");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_base, AppConfig::default().api_base);
    }
}
