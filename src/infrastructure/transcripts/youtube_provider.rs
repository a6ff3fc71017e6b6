use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::application::ports::{TranscriptProvider, TranscriptProviderError};
use crate::domain::{CaptionTrack, FetchedTranscript, TranscriptEntry};

/// Transcript provider backed by the `yt-transcript-rs` scraper, constructed
/// without proxy or cookie authentication.
pub struct YouTubeTranscriptProvider {
    api: YouTubeTranscriptApi,
}

impl YouTubeTranscriptProvider {
    pub fn new() -> anyhow::Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)?;
        Ok(Self { api })
    }
}

#[async_trait]
impl TranscriptProvider for YouTubeTranscriptProvider {
    async fn fetch(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<FetchedTranscript, TranscriptProviderError> {
        let langs: Vec<&str> = languages.iter().map(String::as_str).collect();

        let fetched = self
            .api
            .fetch_transcript(video_id, &langs, false)
            .await
            .map_err(|e| classify_error(e.to_string(), &languages.join(",")))?;

        let entries = fetched
            .snippets
            .into_iter()
            .map(|s| TranscriptEntry::new(s.start, s.duration, s.text))
            .collect();

        Ok(FetchedTranscript {
            video_id: fetched.video_id,
            language: fetched.language,
            language_code: fetched.language_code,
            is_generated: fetched.is_generated,
            entries,
        })
    }

    async fn list(&self, video_id: &str) -> Result<Vec<CaptionTrack>, TranscriptProviderError> {
        let transcript_list = self
            .api
            .list_transcripts(video_id)
            .await
            .map_err(|e| classify_error(e.to_string(), ""))?;

        Ok(transcript_list
            .transcripts()
            .map(|t| CaptionTrack {
                language: t.language.clone(),
                language_code: t.language_code.clone(),
                is_generated: t.is_generated,
                is_translatable: t.is_translatable(),
            })
            .collect())
    }
}

/// `yt-transcript-rs` reports every retrieval failure through one error type
/// whose message carries the cause, so classification matches on the message.
fn classify_error(message: String, languages: &str) -> TranscriptProviderError {
    let lower = message.to_lowercase();
    if lower.contains("disabled") {
        TranscriptProviderError::TranscriptsDisabled
    } else if lower.contains("no transcript") || lower.contains("requested language") {
        TranscriptProviderError::NoTranscriptFound {
            languages: languages.to_string(),
        }
    } else if lower.contains("unavailable") || lower.contains("not available") {
        TranscriptProviderError::VideoUnavailable
    } else {
        TranscriptProviderError::RetrievalFailed(message)
    }
}
