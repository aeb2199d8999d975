use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub success: bool,
    pub languages: BTreeMap<&'static str, &'static str>,
    pub count: usize,
}

pub async fn languages_handler(State(state): State<AppState>) -> impl IntoResponse {
    let languages = state.document_service.translator().supported_languages();

    Json(LanguagesResponse {
        success: true,
        count: languages.len(),
        languages,
    })
}
