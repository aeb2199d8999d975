use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::application::ports::{ExtractionError, ResultCache, TextExtractor};
use crate::domain::{
    DOCX_MIME, DocumentFormat, Fingerprint, MIN_MEANINGFUL_CHARS, PDF_MIME, SOURCE_LANGUAGE,
    SimplificationResult, SourceDocument, TranslationResult,
};

use super::cached_result;
use super::simplification_service::SimplificationService;
use super::translation_service::TranslationService;

pub const PIPELINE_TRANSLATE_OPERATION: &str = "pipeline_translate";
pub const PIPELINE_TRANSLATION_TTL: Duration = Duration::from_secs(3600);
pub const MAX_LANGUAGE_CODE_LEN: usize = 10;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Limits applied to uploads before any extraction work starts.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_text_chars: usize,
    pub accepted_content_types: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024,
            max_text_chars: 50_000,
            accepted_content_types: [
                PDF_MIME,
                DOCX_MIME,
                "application/msword",
                "image/jpeg",
                "image/png",
                "image/tiff",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl UploadPolicy {
    pub fn accepts(&self, content_type: &str) -> bool {
        self.accepted_content_types
            .iter()
            .any(|accepted| accepted == content_type)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub format: DocumentFormat,
    pub size_mb: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedDocument {
    pub file_info: FileInfo,
    pub original_text: String,
    pub text_is_placeholder: bool,
    pub text_was_truncated: bool,
    pub simplification: SimplificationResult,
    pub translation: Option<TranslationResult>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("file too large: {size_bytes} bytes exceeds the {max_bytes} byte limit")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("unsupported file type: {filename}")]
    UnsupportedFormat { filename: String },
    #[error("invalid target language: {0}")]
    InvalidLanguage(String),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error("could not extract meaningful text from the document")]
    InsufficientText,
}

/// Drives one upload through validation, extraction, simplification and
/// optional translation.
pub struct DocumentService {
    extractor: Arc<dyn TextExtractor>,
    simplifier: Arc<SimplificationService>,
    translator: Arc<TranslationService>,
    cache: Arc<dyn ResultCache>,
    policy: UploadPolicy,
}

impl DocumentService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        simplifier: Arc<SimplificationService>,
        translator: Arc<TranslationService>,
        cache: Arc<dyn ResultCache>,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            extractor,
            simplifier,
            translator,
            cache,
            policy,
        }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    pub fn translator(&self) -> &TranslationService {
        &self.translator
    }

    #[tracing::instrument(
        skip(self, document),
        fields(
            filename = %document.filename,
            content_type = %document.declared_content_type,
            size_bytes = document.size_bytes(),
        )
    )]
    pub async fn process(
        &self,
        document: SourceDocument,
        target_language: &str,
    ) -> Result<ProcessedDocument, ProcessingError> {
        let target_language = match target_language.trim() {
            "" => SOURCE_LANGUAGE,
            code if code.chars().count() > MAX_LANGUAGE_CODE_LEN => {
                return Err(ProcessingError::InvalidLanguage(code.to_string()));
            }
            code => code,
        };

        let size_bytes = document.size_bytes();
        if size_bytes > self.policy.max_file_size_bytes {
            return Err(ProcessingError::FileTooLarge {
                size_bytes,
                max_bytes: self.policy.max_file_size_bytes,
            });
        }

        if !self.policy.accepts(&document.declared_content_type) {
            return Err(ProcessingError::UnsupportedContentType(
                document.declared_content_type,
            ));
        }

        let format = document.format();
        if !format.is_known() {
            return Err(ProcessingError::UnsupportedFormat {
                filename: document.filename,
            });
        }

        let SourceDocument {
            filename, bytes, ..
        } = document;

        let mut extracted = self.extractor.extract(&bytes, format).await?;
        drop(bytes);

        if !extracted.is_meaningful() {
            tracing::warn!(
                chars = extracted.char_count(),
                min_chars = MIN_MEANINGFUL_CHARS,
                "Extracted text below the meaningful-content threshold"
            );
            return Err(ProcessingError::InsufficientText);
        }

        let text_was_truncated = extracted.truncate_for_processing(self.policy.max_text_chars);
        if text_was_truncated {
            tracing::info!(
                max_chars = self.policy.max_text_chars,
                "Extracted text truncated for processing"
            );
        }

        let simplification = self.simplifier.simplify(&extracted.text).await;

        let translation = if target_language == SOURCE_LANGUAGE {
            None
        } else {
            Some(
                self.translate_simplified(&simplification.markdown, target_language)
                    .await,
            )
        };

        tracing::info!(
            format = %format,
            simplification_fallback = simplification.was_fallback,
            translated = translation.is_some(),
            "Document processed"
        );

        Ok(ProcessedDocument {
            file_info: FileInfo {
                name: filename,
                format,
                size_mb: (size_bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0,
            },
            original_text: extracted.text,
            text_is_placeholder: extracted.is_placeholder,
            text_was_truncated,
            simplification,
            translation,
        })
    }

    /// Request-level memo keyed on the simplified output, so identical
    /// simplifications are not re-translated.
    async fn translate_simplified(
        &self,
        simplified: &str,
        target_language: &str,
    ) -> TranslationResult {
        let key = Fingerprint::of(
            PIPELINE_TRANSLATE_OPERATION,
            simplified,
            Some(target_language),
        );

        if let Some(cached) = cached_result::load::<TranslationResult>(&*self.cache, &key) {
            return cached;
        }

        let translation = self.translator.translate(simplified, target_language).await;
        cached_result::store(&*self.cache, key, &translation, PIPELINE_TRANSLATION_TTL);
        translation
    }
}
