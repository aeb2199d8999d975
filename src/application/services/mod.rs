mod cached_result;
mod document_service;
mod simplification_service;
mod translation_service;

pub use document_service::{
    DocumentService, FileInfo, MAX_LANGUAGE_CODE_LEN, PIPELINE_TRANSLATE_OPERATION,
    ProcessedDocument, ProcessingError, UploadPolicy,
};
pub use simplification_service::{SIMPLIFY_OPERATION, SimplificationService};
pub use translation_service::{TRANSLATE_OPERATION, TranslationService, mock_translation};
