use std::io::Cursor;

use async_trait::async_trait;
use docx_rust::DocxFile;
use docx_rust::document::{BodyContent, Paragraph, ParagraphContent, Run, RunContent};

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{DocumentFormat, ExtractedText};

/// Reads top-level body paragraphs in order. Tables and headings get no
/// special treatment.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_paragraphs(data: &[u8]) -> Result<String, String> {
        let file = DocxFile::from_reader(Cursor::new(data)).map_err(|e| e.to_string())?;
        let docx = file.parse().map_err(|e| e.to_string())?;

        let paragraphs: Vec<String> = docx
            .document
            .body
            .content
            .iter()
            .filter_map(|content| match content {
                BodyContent::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for content in &para.content {
        match content {
            ParagraphContent::Run(run) => push_run_text(run, &mut text),
            ParagraphContent::Link(link) => {
                if let Some(run) = &link.content {
                    push_run_text(run, &mut text);
                }
            }
            _ => {}
        }
    }

    text
}

fn push_run_text(run: &Run, out: &mut String) {
    for content in &run.content {
        match content {
            RunContent::Text(t) => out.push_str(&t.text),
            RunContent::Tab(_) => out.push('\t'),
            RunContent::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[async_trait]
impl TextExtractor for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractedText, ExtractionError> {
        if format != DocumentFormat::Docx {
            return Err(ExtractionError::UnsupportedFormat(format));
        }

        let data_owned = data.to_vec();
        let text = tokio::task::spawn_blocking(move || Self::extract_paragraphs(&data_owned))
            .await
            .map_err(|e| {
                ExtractionError::failed(DocumentFormat::Docx, format!("task join error: {e}"))
            })?
            .map_err(|cause| ExtractionError::failed(DocumentFormat::Docx, cause))?;

        tracing::info!(chars = text.chars().count(), "DOCX text extraction complete");

        Ok(ExtractedText::new(text, DocumentFormat::Docx))
    }
}
