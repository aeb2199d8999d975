use std::sync::Arc;

use crate::application::services::DocumentService;

#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<DocumentService>,
}
