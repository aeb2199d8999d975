use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::ExtractionError;
use crate::application::services::{FileInfo, ProcessedDocument, ProcessingError};
use crate::domain::{SOURCE_LANGUAGE, SourceDocument};
use crate::presentation::state::AppState;

const UNSUPPORTED_FILE_MESSAGE: &str =
    "Unsupported file type. Please upload PDF, DOCX, or image files.";

#[derive(Serialize)]
pub struct ProcessDocumentResponse {
    pub success: bool,
    pub file_info: FileInfo,
    pub results: ProcessResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
}

#[derive(Serialize)]
pub struct ProcessResults {
    pub original_text: String,
    pub original_text_is_placeholder: bool,
    pub original_text_truncated: bool,
    pub simplified_text: String,
    pub simplification_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_fallback: Option<bool>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ProcessedDocument> for ProcessDocumentResponse {
    fn from(processed: ProcessedDocument) -> Self {
        let target_language = processed
            .translation
            .as_ref()
            .map(|t| t.target_language.clone());

        Self {
            success: true,
            file_info: processed.file_info,
            results: ProcessResults {
                original_text: processed.original_text,
                original_text_is_placeholder: processed.text_is_placeholder,
                original_text_truncated: processed.text_was_truncated,
                simplified_text: processed.simplification.markdown,
                simplification_fallback: processed.simplification.was_fallback,
                translation_fallback: processed.translation.as_ref().map(|t| t.was_fallback),
                translated_text: processed.translation.map(|t| t.markdown),
            },
            target_language,
        }
    }
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

fn file_too_large_response(max_bytes: u64) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        format!(
            "File too large. Maximum size is {}MB.",
            max_bytes / (1024 * 1024)
        ),
    )
}

/// Bodies cut off by the request size limit read as oversized uploads.
fn multipart_error_response(error: &MultipartError, context: &str, max_bytes: u64) -> Response {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(max_bytes, "Upload exceeded the request body limit");
        return file_too_large_response(max_bytes);
    }

    tracing::error!(error = %error, "{context}");
    error_response(StatusCode::BAD_REQUEST, format!("{context}: {error}"))
}

fn processing_error_response(error: &ProcessingError) -> Response {
    match error {
        ProcessingError::FileTooLarge { max_bytes, .. } => file_too_large_response(*max_bytes),
        ProcessingError::UnsupportedContentType(_)
        | ProcessingError::UnsupportedFormat { .. }
        | ProcessingError::Extraction(ExtractionError::UnsupportedFormat(_)) => {
            error_response(StatusCode::BAD_REQUEST, UNSUPPORTED_FILE_MESSAGE)
        }
        ProcessingError::InvalidLanguage(_) => {
            error_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        ProcessingError::Extraction(e) => error_response(
            StatusCode::BAD_REQUEST,
            format!("Could not read document: {e}"),
        ),
        ProcessingError::InsufficientText => error_response(
            StatusCode::BAD_REQUEST,
            "Could not extract meaningful text from the document.",
        ),
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_document_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut upload: Option<SourceDocument> = None;
    let mut target_language = SOURCE_LANGUAGE.to_string();
    let max_bytes = state.document_service.policy().max_file_size_bytes;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return multipart_error_response(&e, "Failed to read multipart", max_bytes),
        };

        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();

                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(e) => {
                        return multipart_error_response(&e, "Failed to read file", max_bytes);
                    }
                };

                tracing::debug!(
                    filename = %filename,
                    content_type = %content_type,
                    bytes = data.len(),
                    "File upload received"
                );
                upload = Some(SourceDocument::new(filename, content_type, data.to_vec()));
            }
            Some("target_language") => match field.text().await {
                Ok(text) => target_language = text,
                Err(e) => {
                    return multipart_error_response(
                        &e,
                        "Failed to read target_language",
                        max_bytes,
                    );
                }
            },
            _ => {}
        }
    }

    let Some(document) = upload else {
        tracing::warn!("Process request with no file");
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    match state
        .document_service
        .process(document, &target_language)
        .await
    {
        Ok(processed) => {
            (StatusCode::OK, Json(ProcessDocumentResponse::from(processed))).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Document processing rejected");
            processing_error_response(&e)
        }
    }
}
