use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::UploadPolicy;
use crate::infrastructure::cache::CacheConfig;
use crate::infrastructure::llm::DEFAULT_GROQ_BASE_URL;

use super::Environment;

pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub cache: CacheSettings,
    pub upload: UploadSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("chat_model", &self.chat_model)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub max_entries: usize,
    pub cull_frequency: usize,
}

impl CacheSettings {
    pub fn to_cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_entries: self.max_entries,
            cull_frequency: self.cull_frequency,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: u64,
    pub max_text_chars: usize,
}

impl UploadSettings {
    pub fn to_policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_file_size_bytes: self.max_file_size_mb * 1024 * 1024,
            max_text_chars: self.max_text_chars,
            ..UploadPolicy::default()
        }
    }
}

impl Settings {
    /// Layers defaults, the optional `appsettings.{env}` file and `APP_*`
    /// variables (nested keys joined with `__`, e.g. `APP_LLM__API_KEY`).
    /// `GROQ_API_KEY` seeds the default key.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let default_api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("llm.api_key", default_api_key)?
            .set_default("llm.base_url", DEFAULT_GROQ_BASE_URL)?
            .set_default("llm.chat_model", DEFAULT_CHAT_MODEL)?
            .set_default("cache.max_entries", 1000)?
            .set_default("cache.cull_frequency", 3)?
            .set_default("upload.max_file_size_mb", 10)?
            .set_default("upload.max_text_chars", 50_000)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
