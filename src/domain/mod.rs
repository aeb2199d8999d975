mod document;
mod extracted_text;
mod fingerprint;
mod language;
mod simplification_result;
mod translation_result;

pub use document::{DOCX_MIME, DocumentFormat, PDF_MIME, SourceDocument};
pub use extracted_text::{ExtractedText, MIN_MEANINGFUL_CHARS, TRUNCATION_MARKER, clip_chars};
pub use fingerprint::Fingerprint;
pub use language::{SOURCE_LANGUAGE, SupportedLanguages};
pub use simplification_result::SimplificationResult;
pub use translation_result::TranslationResult;
