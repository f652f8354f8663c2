use crate::extract::DEFAULT_READER_URL;
use crate::llm::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::types::TargetLanguage;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_API_KEY_ENV: &str = "DASHSCOPE_API_KEY";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    pub llm: LLMConfig,
    pub extraction: ExtractionConfig,
    pub ui: UIConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ExtractionConfig {
    pub reader_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct UIConfig {
    pub default_language: String,
    pub tick_rate_ms: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            reader_url: DEFAULT_READER_URL.to_string(),
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            default_language: TargetLanguage::default().to_string(),
            tick_rate_ms: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("lingo"))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default path, falling back to defaults
    /// when no file exists yet
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default_config());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// LLM settings for the startup credential check. Read leniently, so a
    /// file that fails validation elsewhere still names its key variable.
    pub fn credential_settings() -> LLMConfig {
        Self::config_path()
            .ok()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|contents| LLMConfig::from_toml_lenient(&contents))
            .unwrap_or_default()
    }

    /// Write this config to `path` unless a file is already there.
    /// Returns whether a file was written.
    pub fn write_if_missing(&self, path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        self.save_to(path)?;
        Ok(true)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        // May hold an API key
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    pub fn default_config() -> Self {
        Config {
            llm: LLMConfig::default(),
            extraction: ExtractionConfig::default(),
            ui: UIConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("llm.base_url", &self.llm.base_url)?;
        validate_http_url("extraction.reader_url", &self.extraction.reader_url)?;

        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue("llm.model must not be empty".to_string()));
        }

        if self.llm.api_key_env.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "llm.api_key_env must not be empty".to_string(),
            ));
        }

        self.default_language()?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "ui.tick_rate_ms must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "Unknown logging.level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    pub fn default_language(&self) -> Result<TargetLanguage, ConfigError> {
        self.ui
            .default_language
            .parse()
            .map_err(|e| ConfigError::InvalidValue(format!("ui.default_language: {}", e)))
    }

    /// Get API key from environment variable or config
    pub fn get_api_key(&self) -> Option<String> {
        self.llm.resolve_api_key()
    }
}

/// The `[llm]` table alone; other sections are ignored
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LLMSection {
    llm: LLMConfig,
}

impl LLMConfig {
    /// Parse only the `[llm]` table, falling back to defaults
    pub fn from_toml_lenient(contents: &str) -> Self {
        let mut llm = toml::from_str::<LLMSection>(contents)
            .map(|section| section.llm)
            .unwrap_or_default();
        if llm.api_key_env.trim().is_empty() {
            llm.api_key_env = DEFAULT_API_KEY_ENV.to_string();
        }
        llm
    }

    /// Key from the named environment variable, then from the file
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(&self.api_key_env)
            && !key.is_empty()
        {
            return Some(key);
        }

        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidValue(format!("{} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidValue(format!(
            "{} must be an http or https URL, got '{}'",
            field, value
        )));
    }

    Ok(())
}
