use async_trait::async_trait;

/// Recognises text in an already-decoded raster image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// `png` is an RGB PNG; `language` is a tesseract-style code such as `eng`.
    async fn recognize(&self, png: &[u8], language: &str) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("ocr engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("ocr failed: {0}")]
    RecognitionFailed(String),
}
