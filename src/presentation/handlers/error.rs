use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::TranscriptProviderError;
use crate::application::services::{OrchestrationError, SummaryError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Maps transcript retrieval failures onto HTTP responses: missing, disabled
/// or gone transcripts are not-found conditions; anything else is internal.
pub fn transcript_error_response(err: TranscriptProviderError) -> Response {
    let status = match &err {
        TranscriptProviderError::TranscriptsDisabled
        | TranscriptProviderError::NoTranscriptFound { .. }
        | TranscriptProviderError::VideoUnavailable => StatusCode::NOT_FOUND,
        TranscriptProviderError::RetrievalFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "Transcript retrieval failed");
    } else {
        tracing::warn!(error = %err, "Transcript not available");
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Maps summarization failures: fatal upstream rejections become 502,
/// an exhausted candidate list becomes 503 with retry guidance.
pub fn summary_error_response(err: SummaryError) -> Response {
    match err {
        SummaryError::Transcript(e) => transcript_error_response(e),
        SummaryError::Completion(OrchestrationError::FatalUpstream { status, detail }) => {
            tracing::error!(status = status, detail = %detail, "Completion request rejected upstream");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("upstream rejected the request ({}): {}", status, detail),
                }),
            )
                .into_response()
        }
        SummaryError::Completion(e @ OrchestrationError::AllCandidatesExhausted { .. }) => {
            tracing::error!(error = %e, "All completion candidates exhausted");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: format!("{}; retry later", e),
                }),
            )
                .into_response()
        }
        SummaryError::EmptyTranscript => {
            tracing::warn!("Transcript contains no text to summarize");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: "transcript contains no text".to_string(),
                }),
            )
                .into_response()
        }
    }
}
