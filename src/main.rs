use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use undertekst::application::services::{FallbackOrchestrator, SummaryService};
use undertekst::infrastructure::llm::OpenAiCompletionClient;
use undertekst::infrastructure::observability::{init_tracing, TracingConfig};
use undertekst::infrastructure::transcripts::YouTubeTranscriptProvider;
use undertekst::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    let environment = Environment::from_env();

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment.as_str()),
        settings.server.port,
    );

    let transcript_provider = Arc::new(YouTubeTranscriptProvider::new()?);

    let completion_client = Arc::new(OpenAiCompletionClient::new(
        settings.llm.base_url.clone(),
        settings.llm.api_key.clone(),
        settings.llm.max_tokens,
        settings.llm.temperature,
    ));

    let orchestrator = Arc::new(FallbackOrchestrator::new(
        completion_client,
        settings.llm.fallback_models.clone(),
    ));

    let summary_service = Arc::new(SummaryService::new(
        Arc::clone(&transcript_provider),
        orchestrator,
        settings.llm.default_model.clone(),
    ));

    let state = AppState {
        transcript_provider,
        summary_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
