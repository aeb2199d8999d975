use lexplain::application::ports::{ExtractionError, TextExtractor};
use lexplain::domain::DocumentFormat;
use lexplain::infrastructure::text_processing::{PAGE_BREAK, PdfAdapter, SCANNED_PDF_NOTICE};

#[tokio::test]
async fn given_valid_pdf_bytes_when_extracting_then_returns_text() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = include_bytes!("../../fixtures/sample.pdf");

    let result = adapter.extract(pdf_bytes, DocumentFormat::Pdf).await;

    let extracted = result.unwrap();
    assert!(extracted.text.contains("Hello"));
    assert!(!extracted.is_placeholder);
    assert_eq!(extracted.source_format, DocumentFormat::Pdf);
}

#[tokio::test]
async fn given_two_page_pdf_when_extracting_then_pages_joined_with_break_marker() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = include_bytes!("../../fixtures/two_pages.pdf");

    let extracted = adapter
        .extract(pdf_bytes, DocumentFormat::Pdf)
        .await
        .unwrap();

    let pages: Vec<&str> = extracted.text.split(PAGE_BREAK).collect();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("Tenancy"));
    assert!(pages[1].contains("monthly"));
}

#[tokio::test]
async fn given_pdf_without_text_when_extracting_then_returns_scanned_notice() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = include_bytes!("../../fixtures/blank.pdf");

    let extracted = adapter
        .extract(pdf_bytes, DocumentFormat::Pdf)
        .await
        .unwrap();

    assert_eq!(extracted.text, SCANNED_PDF_NOTICE);
    assert!(extracted.is_placeholder);
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();

    let result = adapter
        .extract(b"not a pdf at all", DocumentFormat::Pdf)
        .await;

    assert!(matches!(
        result,
        Err(ExtractionError::Failed {
            format: DocumentFormat::Pdf,
            ..
        })
    ));
}

#[tokio::test]
async fn given_same_pdf_twice_when_extracting_then_results_match() {
    let adapter = PdfAdapter::new();
    let pdf_bytes = include_bytes!("../../fixtures/two_pages.pdf");

    let first = adapter.extract(pdf_bytes, DocumentFormat::Pdf).await.unwrap();
    let second = adapter.extract(pdf_bytes, DocumentFormat::Pdf).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_non_pdf_format_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();

    let result = adapter.extract(b"some data", DocumentFormat::Docx).await;

    assert!(matches!(
        result,
        Err(ExtractionError::UnsupportedFormat(DocumentFormat::Docx))
    ));
}
