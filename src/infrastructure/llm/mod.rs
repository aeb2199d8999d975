mod groq_client;
mod llm_gateway;
mod mock_llm_client;

pub use groq_client::{DEFAULT_GROQ_BASE_URL, GroqClient, PLACEHOLDER_API_KEY, is_usable_api_key};
pub use llm_gateway::LlmGateway;
pub use mock_llm_client::MockLlmClient;
