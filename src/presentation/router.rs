use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{CompletionClient, TranscriptProvider};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, list_tracks_handler, summarize_handler, transcript_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<P, C>(state: AppState<P, C>) -> Router
where
    P: TranscriptProvider + 'static,
    C: CompletionClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/transcript/{video_id}", get(transcript_handler::<P, C>))
        .route(
            "/transcript/{video_id}/list",
            get(list_tracks_handler::<P, C>),
        )
        .route("/summarize/{video_id}", get(summarize_handler::<P, C>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
