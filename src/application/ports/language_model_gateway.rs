use std::time::Duration;

use async_trait::async_trait;

use super::llm_client::{CompletionRequest, LlmClientError};

/// Entry point to the language model used by the simplification and
/// translation services. Implementations never retry.
#[async_trait]
pub trait LanguageModelGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceUnavailableError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceUnavailableError {
    #[error("language model client is not available")]
    ClientUnavailable,
    #[error("language model call timed out after {0:?}")]
    Timeout(Duration),
    #[error("language model call failed: {0}")]
    Remote(#[from] LlmClientError),
}
