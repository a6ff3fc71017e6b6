use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, TranscriptProvider};
use crate::domain::Pattern;
use crate::infrastructure::observability::excerpt;
use crate::presentation::state::AppState;

use super::error::{summary_error_response, ErrorResponse};
use super::transcript::parse_languages;

#[derive(Debug, Deserialize)]
pub struct SummarizeQuery {
    /// Comma-separated language codes in preference order.
    pub languages: Option<String>,
    /// Transformation to apply; defaults to `summary`.
    pub pattern: Option<String>,
    /// Preferred model, overriding the configured default.
    pub model: Option<String>,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub video_id: String,
    pub language_code: String,
    pub pattern: String,
    pub summary: String,
    pub model_used: String,
    pub fallback_used: bool,
    pub usage: serde_json::Map<String, serde_json::Value>,
}

#[tracing::instrument(skip(state), fields(model = ?query.model, pattern = ?query.pattern))]
pub async fn summarize_handler<P, C>(
    State(state): State<AppState<P, C>>,
    Path(video_id): Path<String>,
    Query(query): Query<SummarizeQuery>,
) -> Response
where
    P: TranscriptProvider + 'static,
    C: CompletionClient + 'static,
{
    let languages = parse_languages(
        query.languages.as_deref(),
        &state.settings.transcripts.default_languages,
    );

    let pattern = match query
        .pattern
        .as_deref()
        .unwrap_or("summary")
        .parse::<Pattern>()
    {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected summarize request");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    match state
        .summary_service
        .summarize(&video_id, &languages, pattern, query.model.as_deref())
        .await
    {
        Ok(response) => {
            tracing::info!(
                model_used = %response.result.model_used,
                fallback_used = response.result.fallback_used,
                summary = %excerpt(&response.result.text),
                "Summarization successful"
            );
            (
                StatusCode::OK,
                Json(SummarizeResponse {
                    video_id: response.video_id,
                    language_code: response.language_code,
                    pattern: response.pattern.to_string(),
                    summary: response.result.text,
                    model_used: response.result.model_used,
                    fallback_used: response.result.fallback_used,
                    usage: response.result.usage,
                }),
            )
                .into_response()
        }
        Err(e) => summary_error_response(e),
    }
}
