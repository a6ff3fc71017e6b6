use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{CompletionClient, TranscriptProvider};
use crate::domain::CaptionTrack;
use crate::presentation::state::AppState;

use super::error::transcript_error_response;

#[derive(Serialize)]
pub struct TrackListResponse {
    pub video_id: String,
    pub available_transcripts: Vec<CaptionTrack>,
}

#[tracing::instrument(skip(state))]
pub async fn list_tracks_handler<P, C>(
    State(state): State<AppState<P, C>>,
    Path(video_id): Path<String>,
) -> Response
where
    P: TranscriptProvider + 'static,
    C: CompletionClient + 'static,
{
    match state.transcript_provider.list(&video_id).await {
        Ok(tracks) => {
            tracing::info!(tracks = tracks.len(), "Caption tracks listed");
            (
                StatusCode::OK,
                Json(TrackListResponse {
                    video_id,
                    available_transcripts: tracks,
                }),
            )
                .into_response()
        }
        Err(e) => transcript_error_response(e),
    }
}
