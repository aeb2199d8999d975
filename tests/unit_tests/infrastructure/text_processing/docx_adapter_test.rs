use lexplain::application::ports::{ExtractionError, TextExtractor};
use lexplain::domain::DocumentFormat;
use lexplain::infrastructure::text_processing::DocxAdapter;

#[tokio::test]
async fn given_docx_with_blank_paragraphs_when_extracting_then_joins_non_empty_lines() {
    let adapter = DocxAdapter::new();
    let docx_bytes = include_bytes!("../../fixtures/sample.docx");

    let extracted = adapter
        .extract(docx_bytes, DocumentFormat::Docx)
        .await
        .unwrap();

    assert_eq!(
        extracted.text,
        "Lease Agreement\nThe tenant shall pay rent monthly.\nThe landlord maintains the property."
    );
    assert!(!extracted.is_placeholder);
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_docx_then_returns_extraction_failed() {
    let adapter = DocxAdapter::new();

    let result = adapter
        .extract(b"PK not really a zip", DocumentFormat::Docx)
        .await;

    assert!(matches!(
        result,
        Err(ExtractionError::Failed {
            format: DocumentFormat::Docx,
            ..
        })
    ));
}

#[tokio::test]
async fn given_non_docx_format_when_extracting_then_returns_unsupported() {
    let adapter = DocxAdapter::new();

    let result = adapter.extract(b"data", DocumentFormat::Pdf).await;

    assert!(matches!(result, Err(ExtractionError::UnsupportedFormat(_))));
}
