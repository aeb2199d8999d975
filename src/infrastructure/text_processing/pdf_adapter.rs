use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{DocumentFormat, ExtractedText};

pub const PAGE_BREAK: &str = "\n\n--- Page Break ---\n\n";
pub const SCANNED_PDF_NOTICE: &str =
    "This PDF appears to contain images or scanned content. OCR processing may be needed.";

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Pages that fail to extract are logged and skipped; only a document that
    /// cannot be opened at all is an error.
    fn extract_pages(path: &Path) -> Result<Vec<String>, String> {
        let doc = PdfDocument::open(path).map_err(|e| format!("failed to parse PDF: {e}"))?;

        let page_count = doc
            .page_count()
            .map_err(|e| format!("failed to read page count: {e}"))?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        pages.push(trimmed.to_string());
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        page = page_index + 1,
                        error = %e,
                        "Could not extract text from page, skipping"
                    );
                }
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractedText, ExtractionError> {
        if format != DocumentFormat::Pdf {
            return Err(ExtractionError::UnsupportedFormat(format));
        }

        let fail = |cause: String| ExtractionError::failed(DocumentFormat::Pdf, cause);

        let mut temp_file = tempfile::NamedTempFile::new()
            .map_err(|e| fail(format!("failed to create temp file: {e}")))?;

        temp_file
            .write_all(data)
            .map_err(|e| fail(format!("failed to write temp file: {e}")))?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| fail("PDF extraction timed out".to_string()))?
        .map_err(|e| fail(format!("task join error: {e}")))?
        .map_err(fail)?;

        if pages.is_empty() {
            tracing::warn!("PDF produced no text, likely scanned");
            return Ok(ExtractedText::placeholder(
                SCANNED_PDF_NOTICE,
                DocumentFormat::Pdf,
            ));
        }

        let text = pages.join(PAGE_BREAK);
        tracing::info!(
            page_count = pages.len(),
            chars = text.chars().count(),
            "PDF text extraction complete"
        );

        Ok(ExtractedText::new(text, DocumentFormat::Pdf))
    }
}
