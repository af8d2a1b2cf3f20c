use crate::domain::error::AppError;
use crate::domain::model::LanguageEntry;
use crate::infrastructure::network::transport::{TransportConfig, DEFAULT_RETRIES, DEFAULT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_retries")]
    pub retries: u32,
    pub proxy: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: DEFAULT_RETRIES,
            proxy: None,
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            enable_emoji: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            network: NetworkConfig::default(),
            logging: Logging::default(),
            display: DisplayConfig::default(),
            languages: default_languages(),
        }
    }
}

impl NetworkConfig {
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: Duration::from_millis(self.timeout_ms),
            retries: self.retries,
            proxy: self.proxy.clone().filter(|p| !p.trim().is_empty()),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.network.timeout_ms == 0 {
            return Err(AppError::Config("network.timeout_ms must be positive".to_string()));
        }
        if let Some(entry) = self
            .languages
            .iter()
            .find(|l| l.code.trim().is_empty() || l.name.trim().is_empty())
        {
            return Err(AppError::Config(format!(
                "language entry needs both code and name (got code '{}', name '{}')",
                entry.code, entry.name
            )));
        }
        Ok(())
    }
}

// Defaults
fn default_provider() -> String {
    "google".to_string()
}
fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
fn default_retries() -> u32 {
    DEFAULT_RETRIES
}
fn default_theme() -> String {
    "temp".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn default_languages() -> Vec<LanguageEntry> {
    [
        ("en", "English"),
        ("zh-CN", "Chinese (Simplified)"),
        ("zh-TW", "Chinese (Traditional)"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("fr", "French"),
        ("de", "German"),
        ("es", "Spanish"),
        ("pt", "Portuguese"),
        ("it", "Italian"),
        ("ru", "Russian"),
        ("ar", "Arabic"),
        ("hi", "Hindi"),
        ("vi", "Vietnamese"),
        ("th", "Thai"),
    ]
    .iter()
    .map(|(code, name)| LanguageEntry::new(code, name))
    .collect()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("polyglot").join("config.toml"))
}

/// Load configuration.
///
/// An explicit `path` must exist and parse. The default location is optional:
/// when it is missing or broken, defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    if let Some(path) = path {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        return Config::from_toml_str(&content);
    }

    if let Some(path) = get_config_path() {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match Config::from_toml_str(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), AppError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_content = sample_config()?;
        fs::write(&path, toml_content)
            .map_err(|e| AppError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(AppError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}

pub fn sample_config() -> Result<String, AppError> {
    toml::to_string_pretty(&Config::default())
        .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))
}
