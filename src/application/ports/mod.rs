mod language_model_gateway;
mod llm_client;
mod ocr_engine;
mod result_cache;
mod text_extractor;

pub use language_model_gateway::{LanguageModelGateway, ServiceUnavailableError};
pub use llm_client::{CompletionRequest, LlmClient, LlmClientError};
pub use ocr_engine::{OcrEngine, OcrError};
pub use result_cache::ResultCache;
pub use text_extractor::{ExtractionError, TextExtractor};
