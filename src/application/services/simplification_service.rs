use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{CompletionRequest, LanguageModelGateway, ResultCache};
use crate::domain::{Fingerprint, SimplificationResult, clip_chars};

use super::cached_result;

pub const SIMPLIFY_OPERATION: &str = "simplify";
pub const MAX_INPUT_CHARS: usize = 4000;
pub const PREVIEW_CHARS: usize = 300;
pub const SIMPLIFICATION_TTL: Duration = Duration::from_secs(3600);

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 1500;
const TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str = "You are a legal expert. Explain legal documents in simple terms using this format:

# 📋 Document Summary

## 🔍 Overview
Brief 2-sentence summary

## 👥 Key Parties
Main people/organizations involved

## 📝 Important Terms
Key legal terms explained simply

## 📄 Main Points
- Key clauses in plain English
- Important obligations

## ⚠️ Key Warnings
Critical things to know

## 🎯 Next Steps
What to do next

Use simple language. Be concise.";

/// Turns extracted document text into a plain-language markdown explanation.
///
/// Never fails: when the language model is unreachable the caller gets a fixed
/// template built from a preview of the text.
pub struct SimplificationService {
    gateway: Arc<dyn LanguageModelGateway>,
    cache: Arc<dyn ResultCache>,
    model: String,
}

impl SimplificationService {
    pub fn new(
        gateway: Arc<dyn LanguageModelGateway>,
        cache: Arc<dyn ResultCache>,
        model: String,
    ) -> Self {
        Self {
            gateway,
            cache,
            model,
        }
    }

    /// Keyed on the full input, before it is clipped for the model.
    pub fn cache_key(text: &str) -> Fingerprint {
        Fingerprint::of(SIMPLIFY_OPERATION, text, None)
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn simplify(&self, text: &str) -> SimplificationResult {
        let key = Self::cache_key(text);

        if let Some(cached) = cached_result::load::<SimplificationResult>(&*self.cache, &key) {
            tracing::debug!("Simplification served from cache");
            return cached;
        }

        let request = CompletionRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: format!(
                "Explain this legal document:\n\n{}",
                clip_chars(text, MAX_INPUT_CHARS)
            ),
            model: self.model.clone(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            timeout: TIMEOUT,
        };

        let result = match self.gateway.complete(&request).await {
            Ok(markdown) if !markdown.trim().is_empty() => SimplificationResult::generated(markdown),
            Ok(_) => {
                tracing::warn!("Language model returned an empty explanation, using fallback");
                SimplificationResult::fallback(fallback_markdown(text))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Simplification unavailable, using fallback");
                SimplificationResult::fallback(fallback_markdown(text))
            }
        };

        cached_result::store(&*self.cache, key, &result, SIMPLIFICATION_TTL);
        result
    }
}

fn fallback_markdown(text: &str) -> String {
    let preview = clip_chars(text, PREVIEW_CHARS);
    let ellipsis = if preview.len() < text.len() { "..." } else { "" };

    format!(
        "# 📋 Document Analysis

## ⚠️ AI Service Unavailable
The AI service is not available. Configure your Groq API key for detailed analysis.

## 📝 Document Preview
```
{preview}{ellipsis}
```

## 📄 General Guidance
- Review all terms carefully
- Note dates and obligations
- Consider legal consultation

## 🎯 Recommendation
Configure AI service or consult an attorney."
    )
}
