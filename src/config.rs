use dotenvy::dotenv;
use std::env;
use std::fmt;

use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Settings for the inference client. Built once in `main` and handed down.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Config {
        Config {
            openai_api_key: api_key.into(),
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Ok(Config {
            openai_api_key: get_env("OPENAI_API_KEY")?,
            openai_model: get_env_or_default("OPENAI_MODEL", DEFAULT_MODEL),
            openai_base_url: get_env_or_default("OPENAI_BASE_URL", DEFAULT_BASE_URL),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Config {
        self.openai_model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Config {
        self.openai_base_url = base_url.into();
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}

fn get_env(key: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(key.to_string())),
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
