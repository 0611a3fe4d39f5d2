//! Configuration file parser for ~/.config/tripview/config.toml.
//!
//! The config file is optional; a missing file yields `Config::default()`.
//! Unknown keys are accepted by serde but logged as a warning, since they are
//! usually typos.
use crate::content::RetryPolicy;
use crate::locale::Language;
use crate::util::{normalize_base_url, BaseUrlError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("Invalid base_url: {0}")]
    BaseUrl(#[from] BaseUrlError),

    #[error("Unsupported language {0:?} (expected \"es\" or \"en\")")]
    Language(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level configuration as written in the file.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content service base URL.
    pub base_url: String,

    /// Package whose page is shown.
    pub package_id: String,

    /// Page language code ("es" or "en").
    pub language: String,

    /// Per-attempt request timeout.
    pub timeout_secs: u64,

    /// Attempts per category fetch, including the first.
    pub max_attempts: u32,

    /// Delay before the first retry; doubles for each later one.
    pub initial_delay_ms: u64,

    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Custom keybinding overrides. Keys are action names, values are key strings.
    pub keybindings: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            base_url: "http://localhost:8000".to_string(),
            package_id: "4days".to_string(),
            language: Language::default().code().to_string(),
            timeout_secs: policy.timeout.as_secs(),
            max_attempts: policy.max_attempts,
            initial_delay_ms: policy.initial_delay.as_millis() as u64,
            theme: "dark".to_string(),
            keybindings: HashMap::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 8] = [
        "base_url",
        "package_id",
        "language",
        "timeout_secs",
        "max_attempts",
        "initial_delay_ms",
        "theme",
        "keybindings",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(content)?;
        tracing::info!(
            path = %path.display(),
            base_url = %config.base_url,
            package = %config.package_id,
            language = %config.language,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parsed page language.
    pub fn page_language(&self) -> Result<Language, ConfigError> {
        Language::from_code(&self.language)
            .ok_or_else(|| ConfigError::Language(self.language.clone()))
    }

    /// Validated base URL without trailing `/`.
    pub fn validated_base_url(&self) -> Result<String, ConfigError> {
        Ok(normalize_base_url(&self.base_url)?)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
