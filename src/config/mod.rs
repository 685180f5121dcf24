//! Configuration system (layered: code > env > config file).

use std::path::Path;

use serde::Deserialize;

use crate::error::{LecternError, Result};

/// Default Gemini text model.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
/// Default Gemini speech model.
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Layered configuration for Lectern.
///
/// Resolution order:
/// 1. Explicit values set in code
/// 2. Environment (`GEMINI_API_KEY` / `GOOGLE_API_KEY`, `LECTERN_BASE_URL`)
/// 3. `config.toml` under the platform config directory
#[derive(Debug, Clone, Default)]
pub struct LecternConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    text_model: Option<String>,
    tts_model: Option<String>,
}

/// On-disk shape of `config.toml`.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    api_key: Option<String>,
    base_url: Option<String>,
    text_model: Option<String>,
    tts_model: Option<String>,
}

impl LecternConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the environment, falling back to the user config file.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();

        config.api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .ok();
        config.base_url = std::env::var("LECTERN_BASE_URL").ok();
        config.text_model = std::env::var("LECTERN_TEXT_MODEL").ok();
        config.tts_model = std::env::var("LECTERN_TTS_MODEL").ok();

        if let Some(dirs) = directories::ProjectDirs::from("", "", "lectern") {
            let path = dirs.config_dir().join("config.toml");
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(file_config) => config.merge_missing_from(file_config),
                    Err(e) => tracing::warn!(error = %e, "Ignoring unreadable config file"),
                }
            }
        }

        config
    }

    /// Load a config file directly.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&raw)
            .map_err(|e| LecternError::Configuration(format!("invalid config file: {e}")))?;
        Ok(Self {
            api_key: file.api_key,
            base_url: file.base_url,
            text_model: file.text_model,
            tts_model: file.tts_model,
        })
    }

    /// Fill any unset field from `other`.
    fn merge_missing_from(&mut self, other: Self) {
        if self.api_key.is_none() {
            self.api_key = other.api_key;
        }
        if self.base_url.is_none() {
            self.base_url = other.base_url;
        }
        if self.text_model.is_none() {
            self.text_model = other.text_model;
        }
        if self.tts_model.is_none() {
            self.tts_model = other.tts_model;
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Resolve the API key or fail with an authentication error.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            LecternError::Authentication(
                "No API key configured; set GEMINI_API_KEY or add api_key to config.toml"
                    .to_string(),
            )
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn text_model(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    pub fn tts_model(&self) -> &str {
        self.tts_model.as_deref().unwrap_or(DEFAULT_TTS_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn from_file_reads_all_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_key = \"file-key\"\nbase_url = \"http://localhost:9000\"\ntext_model = \"gemini-x\"\n",
        )
        .unwrap();

        let config = LecternConfig::from_file(&path).unwrap();
        assert_eq!(config.api_key(), Some("file-key"));
        assert_eq!(config.base_url(), Some("http://localhost:9000"));
        assert_eq!(config.text_model(), "gemini-x");
        assert_eq!(config.tts_model(), DEFAULT_TTS_MODEL);
    }

    #[test]
    fn invalid_file_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_key = [not toml").unwrap();

        let err = LecternConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, LecternError::Configuration(_)));
    }

    #[test]
    fn explicit_key_takes_precedence_over_merged_file() {
        let mut config = LecternConfig::new().with_api_key("explicit");
        config.merge_missing_from(LecternConfig::new().with_api_key("from-file"));
        assert_eq!(config.api_key(), Some("explicit"));
    }

    #[test]
    fn require_api_key_fails_without_key() {
        let err = LecternConfig::new().require_api_key().unwrap_err();
        assert!(matches!(err, LecternError::Authentication(_)));
    }

    #[test]
    fn default_models_are_used_when_unset() {
        let config = LecternConfig::new();
        assert_eq!(config.text_model(), DEFAULT_TEXT_MODEL);
        assert_eq!(config.tts_model(), DEFAULT_TTS_MODEL);
    }
}
