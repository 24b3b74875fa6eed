use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::{LLMConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "Interview.toml";
const CONFIG_PATH_VAR: &str = "INTERVIEW_CONFIG";

const ENV_PREFIX: &str = "INTERVIEW_";
const OPENROUTER_ENV_KEYS: &[&str] = &[
    "openrouter_api_key",
    "openrouter_model",
    "openrouter_base_url",
];

/// Process-wide settings, loaded once at startup.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub openrouter_api_key: String,
    pub openrouter_model: String,
    pub openrouter_base_url: String,
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openrouter_api_key: String::new(),
            openrouter_model: DEFAULT_MODEL.to_string(),
            openrouter_base_url: DEFAULT_BASE_URL.to_string(),
            database_url: "sqlite://interviews.db".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openrouter_api_key", &"<redacted>")
            .field("openrouter_model", &self.openrouter_model)
            .field("openrouter_base_url", &self.openrouter_base_url)
            .field("database_url", &self.database_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl AppConfig {
    /// Defaults, then the optional TOML file, then `INTERVIEW_*` and
    /// `OPENROUTER_*` environment variables.
    pub fn figment() -> Figment {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| CONFIG_FILE.to_string());
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(OPENROUTER_ENV_KEYS))
    }

    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: AppConfig = figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        if config.openrouter_api_key.trim().is_empty() {
            return Err(AppError::ConfigError(
                "OPENROUTER_API_KEY must be set".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn llm_config(&self) -> LLMConfig {
        LLMConfig {
            base_url: self.openrouter_base_url.clone(),
            model: self.openrouter_model.clone(),
            api_key: self.openrouter_api_key.clone(),
            temperature: 0.0,
        }
    }
}
