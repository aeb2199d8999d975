use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use lexplain::application::ports::{LanguageModelGateway, ResultCache};
use lexplain::application::services::{
    DocumentService, SimplificationService, TranslationService,
};
use lexplain::infrastructure::cache::InMemoryResultCache;
use lexplain::infrastructure::llm::LlmGateway;
use lexplain::infrastructure::observability::{TracingConfig, init_tracing};
use lexplain::infrastructure::text_processing::{CompositeTextExtractor, TesseractOcrEngine};
use lexplain::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let tracing_config = TracingConfig {
        environment: environment.to_string(),
        ..TracingConfig::default()
    };
    init_tracing(&tracing_config)?;

    let settings = Settings::load(environment)?;
    tracing::debug!(?settings, "Settings loaded");

    let cache: Arc<dyn ResultCache> =
        Arc::new(InMemoryResultCache::new(settings.cache.to_cache_config()));
    let gateway: Arc<dyn LanguageModelGateway> = Arc::new(LlmGateway::groq(
        settings.llm.api_key.clone(),
        settings.llm.base_url.clone(),
    ));

    let simplifier = Arc::new(SimplificationService::new(
        Arc::clone(&gateway),
        Arc::clone(&cache),
        settings.llm.chat_model.clone(),
    ));
    let translator = Arc::new(TranslationService::new(
        Arc::clone(&gateway),
        Arc::clone(&cache),
        settings.llm.chat_model.clone(),
    ));
    let extractor = Arc::new(CompositeTextExtractor::with_ocr_engine(Arc::new(
        TesseractOcrEngine::new(),
    )));

    let document_service = Arc::new(DocumentService::new(
        extractor,
        simplifier,
        translator,
        Arc::clone(&cache),
        settings.upload.to_policy(),
    ));

    let router = create_router(AppState { document_service });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
