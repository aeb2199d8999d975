use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, OcrEngine, TextExtractor};
use crate::domain::{DocumentFormat, ExtractedText};

use super::docx_adapter::DocxAdapter;
use super::image_ocr_adapter::ImageOcrAdapter;
use super::pdf_adapter::PdfAdapter;

/// Routes each format to the extractor registered for it.
pub struct CompositeTextExtractor {
    adapters: HashMap<DocumentFormat, Arc<dyn TextExtractor>>,
}

impl CompositeTextExtractor {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF, DOCX and image extractors, with OCR delegated to `ocr_engine`.
    pub fn with_ocr_engine(ocr_engine: Arc<dyn OcrEngine>) -> Self {
        let pdf: Arc<dyn TextExtractor> = Arc::new(PdfAdapter::new());
        let docx: Arc<dyn TextExtractor> = Arc::new(DocxAdapter::new());
        let image: Arc<dyn TextExtractor> = Arc::new(ImageOcrAdapter::new(ocr_engine));

        Self::new(vec![
            (DocumentFormat::Pdf, pdf),
            (DocumentFormat::Docx, docx),
            (DocumentFormat::Image, image),
        ])
    }
}

#[async_trait]
impl TextExtractor for CompositeTextExtractor {
    async fn extract(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractedText, ExtractionError> {
        let adapter = self
            .adapters
            .get(&format)
            .ok_or(ExtractionError::UnsupportedFormat(format))?;

        adapter.extract(data, format).await
    }
}
