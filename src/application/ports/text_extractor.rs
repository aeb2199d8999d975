use async_trait::async_trait;

use crate::domain::{DocumentFormat, ExtractedText};

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractedText, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("failed to extract text from {format}: {cause}")]
    Failed {
        format: DocumentFormat,
        cause: String,
    },
    #[error("no extractor registered for {0}")]
    UnsupportedFormat(DocumentFormat),
}

impl ExtractionError {
    pub fn failed(format: DocumentFormat, cause: impl Into<String>) -> Self {
        Self::Failed {
            format,
            cause: cause.into(),
        }
    }
}
