use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplificationResult {
    pub markdown: String,
    pub was_fallback: bool,
}

impl SimplificationResult {
    pub fn generated(markdown: String) -> Self {
        Self {
            markdown,
            was_fallback: false,
        }
    }

    pub fn fallback(markdown: String) -> Self {
        Self {
            markdown,
            was_fallback: true,
        }
    }
}
