use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{CompletionRequest, LanguageModelGateway, ResultCache};
use crate::domain::{
    Fingerprint, SOURCE_LANGUAGE, SupportedLanguages, TranslationResult, clip_chars,
};

use super::cached_result;

pub const TRANSLATE_OPERATION: &str = "translate";
pub const MAX_INPUT_CHARS: usize = 3000;
pub const TRANSLATION_TTL: Duration = Duration::from_secs(7200);

const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 2000;
const TIMEOUT: Duration = Duration::from_secs(25);

/// Translates simplified markdown into one of the supported languages.
///
/// Like simplification this is total: a failed model call produces a fixed
/// per-language sample instead of an error.
pub struct TranslationService {
    gateway: Arc<dyn LanguageModelGateway>,
    cache: Arc<dyn ResultCache>,
    model: String,
}

impl TranslationService {
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

    pub fn cache_key(text: &str, target_language: &str) -> Fingerprint {
        Fingerprint::of(TRANSLATE_OPERATION, text, Some(target_language))
    }

    pub fn supported_languages(&self) -> BTreeMap<&'static str, &'static str> {
        SupportedLanguages::as_map()
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn translate(&self, text: &str, target_language: &str) -> TranslationResult {
        if target_language == SOURCE_LANGUAGE {
            return TranslationResult::new(text.to_string(), target_language, false);
        }

        if !SupportedLanguages::is_supported(target_language) {
            tracing::warn!(
                language = target_language,
                "Target language not in the supported table, using its code as the name"
            );
        }

        let key = Self::cache_key(text, target_language);

        if let Some(cached) = cached_result::load::<TranslationResult>(&*self.cache, &key) {
            tracing::debug!("Translation served from cache");
            return cached;
        }

        let language_name = SupportedLanguages::display_name_or_code(target_language);
        let request = CompletionRequest {
            system_prompt: format!("Translate to {language_name}. Maintain formatting."),
            user_prompt: clip_chars(text, MAX_INPUT_CHARS).to_string(),
            model: self.model.clone(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            timeout: TIMEOUT,
        };

        let result = match self.gateway.complete(&request).await {
            Ok(markdown) if !markdown.trim().is_empty() => {
                TranslationResult::new(markdown, target_language, false)
            }
            Ok(_) => {
                tracing::warn!("Language model returned an empty translation, using mock");
                TranslationResult::new(mock_translation(target_language), target_language, true)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Translation unavailable, using mock");
                TranslationResult::new(mock_translation(target_language), target_language, true)
            }
        };

        cached_result::store(&*self.cache, key, &result, TRANSLATION_TTL);
        result
    }
}

/// Fixed sample shown when no real translation could be produced.
pub fn mock_translation(target_language: &str) -> String {
    let language_name = SupportedLanguages::display_name_or_code(target_language);

    match target_language {
        "es" => format!(
            "# 📋 Análisis de Documento

[Traducción de muestra en español]

**Nota**: Configure el servicio con su clave API de Groq para traducción real.

**Idioma**: {language_name}"
        ),
        "fr" => format!(
            "# 📋 Analyse de Document

[Exemple de traduction française]

**Note**: Configurez le service avec votre clé API Groq pour une vraie traduction.

**Langue**: {language_name}"
        ),
        "hi" => format!(
            "# 📋 दस्तावेज़ विश्लेषण

[हिंदी अनुवाद नमूना]

**नोट**: वास्तविक अनुवाद के लिए Groq API कुंजी कॉन्फ़िगर करें।

**भाषा**: {language_name}"
        ),
        _ => format!(
            "# 📋 Document Analysis

[Sample translation for {language_name}]

**Note**: Configure Groq API key for real translation.

**Language**: {language_name}"
        ),
    }
}
