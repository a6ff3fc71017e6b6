use std::str::FromStr;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, TranscriptProvider};
use crate::domain::{formatting, TranscriptEntry};
use crate::presentation::state::AppState;

use super::error::{transcript_error_response, ErrorResponse};

/// Requested transcript representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
    Srt,
    Vtt,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            "srt" => Ok(OutputFormat::Srt),
            "vtt" => Ok(OutputFormat::Vtt),
            other => Err(format!(
                "Invalid format: {}. Expected: json, text, srt, or vtt",
                other
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TranscriptQuery {
    /// Comma-separated language codes in preference order.
    pub languages: Option<String>,
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub video_id: String,
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub transcript: Vec<TranscriptEntry>,
}

/// Splits a comma-separated language preference list, falling back to the
/// configured default when the parameter is absent or empty.
pub(super) fn parse_languages(param: Option<&str>, default: &[String]) -> Vec<String> {
    let parsed: Vec<String> = param
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if parsed.is_empty() {
        default.to_vec()
    } else {
        parsed
    }
}

#[tracing::instrument(skip(state))]
pub async fn transcript_handler<P, C>(
    State(state): State<AppState<P, C>>,
    Path(video_id): Path<String>,
    Query(query): Query<TranscriptQuery>,
) -> Response
where
    P: TranscriptProvider + 'static,
    C: CompletionClient + 'static,
{
    let languages = parse_languages(
        query.languages.as_deref(),
        &state.settings.transcripts.default_languages,
    );

    let format = match query.format.as_deref().unwrap_or("json").parse::<OutputFormat>() {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected transcript request");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    match state.transcript_provider.fetch(&video_id, &languages).await {
        Ok(transcript) => {
            tracing::info!(
                language = %transcript.language_code,
                entries = transcript.entries.len(),
                "Transcript fetched"
            );

            match format {
                OutputFormat::Json => (
                    StatusCode::OK,
                    Json(TranscriptResponse {
                        video_id: transcript.video_id,
                        language: transcript.language,
                        language_code: transcript.language_code,
                        is_generated: transcript.is_generated,
                        transcript: transcript.entries,
                    }),
                )
                    .into_response(),
                OutputFormat::Text => text_response(
                    "text/plain; charset=utf-8",
                    formatting::to_plain_text(&transcript.entries),
                ),
                OutputFormat::Srt => text_response(
                    "application/x-subrip",
                    formatting::to_srt(&transcript.entries),
                ),
                OutputFormat::Vtt => {
                    text_response("text/vtt", formatting::to_vtt(&transcript.entries))
                }
            }
        }
        Err(e) => transcript_error_response(e),
    }
}

fn text_response(content_type: &'static str, body: String) -> Response {
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}
