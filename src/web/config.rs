use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
}

impl FeedConfig {
    /// The NEO_API_KEY environment variable overrides the configured key.
    pub fn resolved_api_key(&self) -> String {
        std::env::var("NEO_API_KEY").unwrap_or_else(|_| self.api_key.clone())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_s: default_timeout_s(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.nasa.gov/neo/rest/v1/feed".to_string()
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

fn default_timeout_s() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_days")]
    pub default_days: u32,
    #[serde(default = "default_rotation_speed")]
    pub default_rotation_speed: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_days: default_days(),
            default_rotation_speed: default_rotation_speed(),
        }
    }
}

fn default_days() -> u32 {
    3
}

fn default_rotation_speed() -> f64 {
    1.5
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
