use lexplain::application::services::{ProcessingError, UploadPolicy};
use lexplain::domain::{DOCX_MIME, DocumentFormat, PDF_MIME, SourceDocument, TRUNCATION_MARKER};
use lexplain::infrastructure::text_processing::NO_TEXT_IN_IMAGE;

use crate::support::{CountingGateway, ScriptedOcrEngine, document_service, png_bytes};

const SAMPLE_DOCX: &[u8] = include_bytes!("../fixtures/sample.docx");
const SAMPLE_PDF: &[u8] = include_bytes!("../fixtures/sample.pdf");

fn upload(filename: &str, content_type: &str, bytes: &[u8]) -> SourceDocument {
    SourceDocument::new(
        filename.to_string(),
        content_type.to_string(),
        bytes.to_vec(),
    )
}

#[tokio::test]
async fn given_oversized_upload_when_processing_then_returns_file_too_large() {
    let policy = UploadPolicy {
        max_file_size_bytes: 10,
        ..UploadPolicy::default()
    };
    let service = document_service(
        CountingGateway::unavailable(),
        ScriptedOcrEngine::returning(""),
        policy,
    );

    let result = service
        .process(upload("big.pdf", PDF_MIME, &[0u8; 11]), "en")
        .await;

    assert!(matches!(
        result,
        Err(ProcessingError::FileTooLarge {
            size_bytes: 11,
            max_bytes: 10
        })
    ));
}

#[tokio::test]
async fn given_unaccepted_content_type_when_processing_then_returns_unsupported_content_type() {
    let service = document_service(
        CountingGateway::unavailable(),
        ScriptedOcrEngine::returning(""),
        UploadPolicy::default(),
    );

    let result = service
        .process(upload("notes.txt", "text/plain", b"plain text here"), "en")
        .await;

    assert!(matches!(
        result,
        Err(ProcessingError::UnsupportedContentType(ct)) if ct == "text/plain"
    ));
}

#[tokio::test]
async fn given_legacy_word_file_when_processing_then_returns_unsupported_format() {
    let service = document_service(
        CountingGateway::unavailable(),
        ScriptedOcrEngine::returning(""),
        UploadPolicy::default(),
    );

    let result = service
        .process(upload("letter.doc", "application/msword", b"binary"), "en")
        .await;

    assert!(matches!(
        result,
        Err(ProcessingError::UnsupportedFormat { filename }) if filename == "letter.doc"
    ));
}

#[tokio::test]
async fn given_overlong_language_code_when_processing_then_returns_invalid_language() {
    let gateway = CountingGateway::unavailable();
    let service = document_service(
        gateway.clone(),
        ScriptedOcrEngine::returning(""),
        UploadPolicy::default(),
    );

    let result = service
        .process(upload("sample.pdf", PDF_MIME, SAMPLE_PDF), "abcdefghijk")
        .await;

    assert!(matches!(result, Err(ProcessingError::InvalidLanguage(_))));
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn given_corrupt_pdf_when_processing_then_returns_extraction_error() {
    let service = document_service(
        CountingGateway::unavailable(),
        ScriptedOcrEngine::returning(""),
        UploadPolicy::default(),
    );

    let result = service
        .process(upload("broken.pdf", PDF_MIME, b"not a pdf at all"), "en")
        .await;

    assert!(matches!(result, Err(ProcessingError::Extraction(_))));
}

#[tokio::test]
async fn given_image_with_too_little_text_when_processing_then_returns_insufficient_text() {
    let gateway = CountingGateway::replying("unused");
    let service = document_service(
        gateway.clone(),
        ScriptedOcrEngine::returning("tiny"),
        UploadPolicy::default(),
    );

    let result = service
        .process(upload("scan.png", "image/png", &png_bytes()), "en")
        .await;

    assert!(matches!(result, Err(ProcessingError::InsufficientText)));
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn given_image_without_text_when_processing_then_placeholder_flows_through() {
    let service = document_service(
        CountingGateway::unavailable(),
        ScriptedOcrEngine::returning("  \n "),
        UploadPolicy::default(),
    );

    let processed = service
        .process(upload("scan.png", "image/png", &png_bytes()), "en")
        .await
        .unwrap();

    assert_eq!(processed.original_text, NO_TEXT_IN_IMAGE);
    assert!(processed.text_is_placeholder);
    assert_eq!(processed.file_info.format, DocumentFormat::Image);
}

#[tokio::test]
async fn given_text_above_limit_when_processing_then_text_is_truncated_with_marker() {
    let policy = UploadPolicy {
        max_text_chars: 20,
        ..UploadPolicy::default()
    };
    let service = document_service(
        CountingGateway::unavailable(),
        ScriptedOcrEngine::returning(&"w".repeat(100)),
        policy,
    );

    let processed = service
        .process(upload("scan.png", "image/png", &png_bytes()), "en")
        .await
        .unwrap();

    assert!(processed.text_was_truncated);
    assert_eq!(
        processed.original_text,
        format!("{}{}", "w".repeat(20), TRUNCATION_MARKER)
    );
}

#[tokio::test]
async fn given_docx_and_english_when_processing_then_simplifies_without_translation() {
    let gateway = CountingGateway::replying("# 📋 Document Summary");
    let service = document_service(
        gateway.clone(),
        ScriptedOcrEngine::returning(""),
        UploadPolicy::default(),
    );

    let processed = service
        .process(upload("lease.docx", DOCX_MIME, SAMPLE_DOCX), "")
        .await
        .unwrap();

    assert!(processed.original_text.starts_with("Lease Agreement\n"));
    assert_eq!(processed.simplification.markdown, "# 📋 Document Summary");
    assert!(!processed.simplification.was_fallback);
    assert!(processed.translation.is_none());
    assert_eq!(processed.file_info.name, "lease.docx");
    assert_eq!(processed.file_info.format, DocumentFormat::Docx);
    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn given_pdf_and_spanish_when_model_unavailable_then_both_stages_fall_back() {
    let service = document_service(
        CountingGateway::unavailable(),
        ScriptedOcrEngine::returning(""),
        UploadPolicy::default(),
    );

    let processed = service
        .process(upload("sample.pdf", PDF_MIME, SAMPLE_PDF), "es")
        .await
        .unwrap();

    assert!(processed.original_text.contains("Hello"));
    assert!(processed.simplification.was_fallback);
    let translation = processed.translation.expect("translation for es");
    assert!(translation.was_fallback);
    assert_eq!(translation.target_language, "es");
    assert!(translation.markdown.starts_with("# 📋 Análisis de Documento"));
}

#[tokio::test]
async fn given_same_document_twice_when_processing_then_model_work_is_reused() {
    let gateway = CountingGateway::replying("explained");
    let service = document_service(
        gateway.clone(),
        ScriptedOcrEngine::returning(""),
        UploadPolicy::default(),
    );

    for _ in 0..2 {
        service
            .process(upload("sample.pdf", PDF_MIME, SAMPLE_PDF), "fr")
            .await
            .unwrap();
    }

    assert_eq!(gateway.call_count(), 2);
}
