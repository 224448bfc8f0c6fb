//! Startup configuration — API key, model ids, endpoint.
//!
//! Built once by `AppConfig::from_env()` and handed to the inference
//! client. Request handling never reads the environment itself.
//!
//! Key resolution order:
//!   1. `GROQ_API_KEY` env var (`.env.local` / `.env` are loaded first)
//!   2. OS keychain entry saved from the settings surface
//!
//! A missing key is a hard error: there is no placeholder key.

use crate::llm::prompts::{TEXT_MODEL, VISION_MODEL};
use crate::llm::provider::{self, ProviderInfo};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_API_BASE: &str = "GROQ_API_BASE";
pub const ENV_VISION_MODEL: &str = "GROQ_VISION_MODEL";
pub const ENV_TEXT_MODEL: &str = "GROQ_TEXT_MODEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{env_key} is not set and no key is stored in the OS keychain")]
    MissingApiKey { env_key: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base: String,
    pub vision_model: String,
    pub text_model: String,
}

// Hand-written so the key never lands in a log line.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &format_args!("<{} chars>", self.api_key.len()))
            .field("api_base", &self.api_base)
            .field("vision_model", &self.vision_model)
            .field("text_model", &self.text_model)
            .finish()
    }
}

impl AppConfig {
    /// Config with default endpoint and models.
    pub fn new(api_key: impl Into<String>) -> Self {
        let info = provider::groq();
        Self {
            api_key: api_key.into(),
            api_base: info.api_base,
            vision_model: VISION_MODEL.to_string(),
            text_model: TEXT_MODEL.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolve the config from the environment and keychain.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_var, provider::keychain_key)
    }

    /// Resolve the config through the given lookups.
    ///
    /// `env` reads a variable by name, `keychain` reads a stored key.
    /// Blank values count as unset.
    pub fn from_lookup(
        env: impl Fn(&str) -> Option<String>,
        keychain: impl Fn(&ProviderInfo) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let info = provider::groq();
        let lookup = |name: &str| non_blank(env(name));

        let api_key = match lookup(&info.env_key) {
            Some(key) => key,
            None => match non_blank(keychain(&info)) {
                Some(key) => {
                    log::info!("[CONFIG] Loaded {} key from OS keychain", info.id);
                    key
                }
                None => {
                    return Err(ConfigError::MissingApiKey {
                        env_key: info.env_key,
                    })
                }
            },
        };
        log::info!("[CONFIG] API key found ({} chars)", api_key.len());

        let mut config = Self::new(api_key);
        if let Some(base) = lookup(ENV_API_BASE) {
            config = config.with_api_base(base);
        }
        if let Some(model) = lookup(ENV_VISION_MODEL) {
            config.vision_model = model;
        }
        if let Some(model) = lookup(ENV_TEXT_MODEL) {
            config.text_model = model;
        }
        log::info!(
            "[CONFIG] Endpoint: {} (vision={}, text={})",
            config.api_base,
            config.vision_model,
            config.text_model
        );
        Ok(config)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load `.env.local`, else `.env`, from `root`. First file found wins.
///
/// Returns the file that was loaded. Runs before the logger starts, so
/// the caller reports the outcome.
pub fn load_dotenv(root: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    for env_file in [".env.local", ".env"] {
        let path = root.join(env_file);
        if path.exists() {
            dotenvy::from_path(&path)?;
            return Ok(Some(path));
        }
    }
    Ok(None)
}
