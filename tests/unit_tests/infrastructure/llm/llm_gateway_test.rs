use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lexplain::application::ports::{
    CompletionRequest, LanguageModelGateway, LlmClient, LlmClientError, ServiceUnavailableError,
};
use lexplain::infrastructure::llm::{LlmGateway, MockLlmClient};

fn request(timeout: Duration) -> CompletionRequest {
    CompletionRequest {
        system_prompt: "You are a legal expert.".to_string(),
        user_prompt: "Explain this legal document:\n\nHello World".to_string(),
        model: "test-model".to_string(),
        temperature: 0.3,
        max_tokens: 1500,
        timeout,
    }
}

#[tokio::test]
async fn given_unavailable_gateway_when_completing_then_returns_client_unavailable() {
    let gateway = LlmGateway::unavailable();

    let result = gateway.complete(&request(Duration::from_secs(1))).await;

    assert!(matches!(
        result,
        Err(ServiceUnavailableError::ClientUnavailable)
    ));
    assert!(!gateway.is_available());
}

#[tokio::test]
async fn given_working_client_when_completing_then_returns_reply_and_forwards_request() {
    let client = Arc::new(MockLlmClient::replying("# Summary"));
    let gateway = LlmGateway::with_client(client.clone());
    let sent = request(Duration::from_secs(1));

    let result = gateway.complete(&sent).await;

    assert_eq!(result.unwrap(), "# Summary");
    assert_eq!(client.call_count(), 1);
    assert_eq!(client.last_request(), Some(sent));
}

#[tokio::test]
async fn given_failing_client_when_completing_then_returns_remote_error() {
    let gateway = LlmGateway::with_client(Arc::new(MockLlmClient::failing()));

    let result = gateway.complete(&request(Duration::from_secs(1))).await;

    assert!(matches!(
        result,
        Err(ServiceUnavailableError::Remote(
            LlmClientError::ApiRequestFailed(_)
        ))
    ));
}

#[tokio::test]
async fn given_slow_client_when_deadline_passes_then_returns_timeout() {
    let client = MockLlmClient::replying("too late").with_delay(Duration::from_millis(500));
    let gateway = LlmGateway::with_client(Arc::new(client));
    let deadline = Duration::from_millis(20);

    let result = gateway.complete(&request(deadline)).await;

    assert!(matches!(result, Err(ServiceUnavailableError::Timeout(d)) if d == deadline));
}

#[tokio::test]
async fn given_concurrent_first_calls_when_initializing_then_init_runs_once() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let gateway = Arc::new(LlmGateway::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(MockLlmClient::replying("ok")) as Arc<dyn LlmClient>)
    }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let gateway = Arc::clone(&gateway);
            tokio::spawn(async move { gateway.complete(&request(Duration::from_secs(1))).await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "ok");
    }

    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_failed_initialization_when_called_again_then_not_retried() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let gateway = LlmGateway::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Err(LlmClientError::InitializationFailed("boom".to_string()))
    });

    for _ in 0..3 {
        let result = gateway.complete(&request(Duration::from_secs(1))).await;
        assert!(matches!(
            result,
            Err(ServiceUnavailableError::ClientUnavailable)
        ));
    }

    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[test]
fn given_groq_gateway_with_placeholder_key_when_checking_then_is_unavailable() {
    let gateway = LlmGateway::groq(
        "your_groq_api_key_here".to_string(),
        "https://api.groq.com/openai/v1".to_string(),
    );

    assert!(!gateway.is_available());
}
