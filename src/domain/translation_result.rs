use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub markdown: String,
    pub target_language: String,
    pub was_fallback: bool,
}

impl TranslationResult {
    pub fn new(markdown: String, target_language: &str, was_fallback: bool) -> Self {
        Self {
            markdown,
            target_language: target_language.to_string(),
            was_fallback,
        }
    }
}
