use async_trait::async_trait;

use crate::domain::{CaptionTrack, FetchedTranscript};

/// External transcript retrieval capability.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetches the transcript for `video_id`, preferring `languages` in order.
    async fn fetch(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<FetchedTranscript, TranscriptProviderError>;

    /// Lists the caption tracks available for `video_id`.
    async fn list(&self, video_id: &str) -> Result<Vec<CaptionTrack>, TranscriptProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptProviderError {
    #[error("transcripts are disabled for this video")]
    TranscriptsDisabled,
    #[error("no transcript found for languages: {languages}")]
    NoTranscriptFound { languages: String },
    #[error("video not found or unavailable")]
    VideoUnavailable,
    #[error("transcript retrieval failed: {0}")]
    RetrievalFailed(String),
}
