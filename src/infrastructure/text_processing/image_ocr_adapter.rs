use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use image::ImageFormat;

use crate::application::ports::{ExtractionError, OcrEngine, TextExtractor};
use crate::domain::{DocumentFormat, ExtractedText};

pub const OCR_LANGUAGE: &str = "eng";
pub const NO_TEXT_IN_IMAGE: &str = "No readable text found in this image.";

pub struct ImageOcrAdapter {
    engine: Arc<dyn OcrEngine>,
}

impl ImageOcrAdapter {
    pub fn new(engine: Arc<dyn OcrEngine>) -> Self {
        Self { engine }
    }

    /// Decodes any supported raster format and re-encodes it as RGB8 PNG.
    fn normalize_to_png(data: &[u8]) -> Result<Vec<u8>, String> {
        let decoded =
            image::load_from_memory(data).map_err(|e| format!("failed to decode image: {e}"))?;

        let mut png = Vec::new();
        decoded
            .to_rgb8()
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| format!("failed to encode image: {e}"))?;

        Ok(png)
    }
}

#[async_trait]
impl TextExtractor for ImageOcrAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractedText, ExtractionError> {
        if format != DocumentFormat::Image {
            return Err(ExtractionError::UnsupportedFormat(format));
        }

        // Nothing to decode: an empty upload reads as an empty page.
        if data.is_empty() {
            tracing::warn!("Empty image upload, no text to recognise");
            return Ok(ExtractedText::placeholder(
                NO_TEXT_IN_IMAGE,
                DocumentFormat::Image,
            ));
        }

        let data_owned = data.to_vec();
        let png = tokio::task::spawn_blocking(move || Self::normalize_to_png(&data_owned))
            .await
            .map_err(|e| {
                ExtractionError::failed(DocumentFormat::Image, format!("task join error: {e}"))
            })?
            .map_err(|cause| ExtractionError::failed(DocumentFormat::Image, cause))?;

        let recognized = self
            .engine
            .recognize(&png, OCR_LANGUAGE)
            .await
            .map_err(|e| ExtractionError::failed(DocumentFormat::Image, e.to_string()))?;

        let text = recognized.trim();
        if text.is_empty() {
            tracing::warn!("OCR found no text in image");
            return Ok(ExtractedText::placeholder(
                NO_TEXT_IN_IMAGE,
                DocumentFormat::Image,
            ));
        }

        tracing::info!(chars = text.chars().count(), "Image OCR complete");

        Ok(ExtractedText::new(text.to_string(), DocumentFormat::Image))
    }
}
