use lexplain::application::ports::{ExtractionError, TextExtractor};
use lexplain::domain::DocumentFormat;
use lexplain::infrastructure::text_processing::{ImageOcrAdapter, NO_TEXT_IN_IMAGE};

use crate::support::{ScriptedOcrEngine, png_bytes};

#[tokio::test]
async fn given_empty_upload_when_extracting_then_returns_sentinel_without_ocr() {
    let engine = ScriptedOcrEngine::returning("should not run");
    let adapter = ImageOcrAdapter::new(engine.clone());

    let extracted = adapter.extract(b"", DocumentFormat::Image).await.unwrap();

    assert_eq!(extracted.text, NO_TEXT_IN_IMAGE);
    assert!(extracted.is_placeholder);
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn given_whitespace_ocr_output_when_extracting_then_returns_sentinel() {
    let engine = ScriptedOcrEngine::returning(" \n\t ");
    let adapter = ImageOcrAdapter::new(engine.clone());

    let extracted = adapter
        .extract(&png_bytes(), DocumentFormat::Image)
        .await
        .unwrap();

    assert_eq!(extracted.text, NO_TEXT_IN_IMAGE);
    assert_eq!(engine.call_count(), 1);
}

#[tokio::test]
async fn given_recognised_text_when_extracting_then_returns_trimmed_text() {
    let adapter = ImageOcrAdapter::new(ScriptedOcrEngine::returning("\n  NOTICE TO QUIT \n\n"));

    let extracted = adapter
        .extract(&png_bytes(), DocumentFormat::Image)
        .await
        .unwrap();

    assert_eq!(extracted.text, "NOTICE TO QUIT");
    assert!(!extracted.is_placeholder);
}

#[tokio::test]
async fn given_undecodable_bytes_when_extracting_then_returns_failed_without_ocr() {
    let engine = ScriptedOcrEngine::returning("unused");
    let adapter = ImageOcrAdapter::new(engine.clone());

    let result = adapter
        .extract(b"definitely not an image", DocumentFormat::Image)
        .await;

    assert!(matches!(
        result,
        Err(ExtractionError::Failed {
            format: DocumentFormat::Image,
            ..
        })
    ));
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn given_ocr_failure_when_extracting_then_returns_failed() {
    let adapter = ImageOcrAdapter::new(ScriptedOcrEngine::failing("engine crashed"));

    let result = adapter.extract(&png_bytes(), DocumentFormat::Image).await;

    assert!(matches!(
        result,
        Err(ExtractionError::Failed { cause, .. }) if cause.contains("engine crashed")
    ));
}
