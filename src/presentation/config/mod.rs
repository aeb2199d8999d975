mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CacheSettings, DEFAULT_CHAT_MODEL, LlmSettings, ServerSettings, Settings, UploadSettings,
};
