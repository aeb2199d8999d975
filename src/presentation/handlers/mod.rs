mod health;
mod languages;
mod process;

pub use health::{api_index_handler, health_handler};
pub use languages::languages_handler;
pub use process::process_document_handler;
