use std::sync::{Arc, OnceLock};
use std::time::Instant;

use async_trait::async_trait;

use crate::application::ports::{
    CompletionRequest, LanguageModelGateway, LlmClient, LlmClientError, ServiceUnavailableError,
};
use crate::infrastructure::observability::sanitize_prompt;

use super::groq_client::GroqClient;

type ClientInit = Box<dyn Fn() -> Result<Arc<dyn LlmClient>, LlmClientError> + Send + Sync>;

/// Wraps one remote provider with lazy one-shot initialization and a hard
/// per-call timeout.
///
/// The client is built on first use. The outcome of that attempt, success or
/// failure, is kept for the life of the gateway: a gateway that failed to
/// initialize stays unavailable.
pub struct LlmGateway {
    init: ClientInit,
    client: OnceLock<Option<Arc<dyn LlmClient>>>,
}

impl LlmGateway {
    pub fn new<F>(init: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn LlmClient>, LlmClientError> + Send + Sync + 'static,
    {
        Self {
            init: Box::new(init),
            client: OnceLock::new(),
        }
    }

    pub fn groq(api_key: String, base_url: String) -> Self {
        Self::new(move || {
            GroqClient::connect(&api_key, &base_url).map(|c| Arc::new(c) as Arc<dyn LlmClient>)
        })
    }

    pub fn with_client(client: Arc<dyn LlmClient>) -> Self {
        Self::new(move || Ok(Arc::clone(&client)))
    }

    pub fn unavailable() -> Self {
        Self::new(|| Err(LlmClientError::MissingCredential))
    }

    pub fn is_available(&self) -> bool {
        self.client().is_some()
    }

    fn client(&self) -> Option<&Arc<dyn LlmClient>> {
        self.client
            .get_or_init(|| match (self.init)() {
                Ok(client) => {
                    tracing::info!("Language model client initialized");
                    Some(client)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Language model client unavailable, using fallbacks");
                    None
                }
            })
            .as_ref()
    }
}

#[async_trait]
impl LanguageModelGateway for LlmGateway {
    #[tracing::instrument(
        skip(self, request),
        fields(
            model = %request.model,
            max_tokens = request.max_tokens,
        )
    )]
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<String, ServiceUnavailableError> {
        let client = self
            .client()
            .ok_or(ServiceUnavailableError::ClientUnavailable)?;

        tracing::debug!(
            prompt = %sanitize_prompt(&request.user_prompt),
            "Sending completion request"
        );

        let started = Instant::now();
        let content = tokio::time::timeout(request.timeout, client.complete(request))
            .await
            .map_err(|_| ServiceUnavailableError::Timeout(request.timeout))??;

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_chars = content.chars().count(),
            "Completion received"
        );

        Ok(content)
    }
}
