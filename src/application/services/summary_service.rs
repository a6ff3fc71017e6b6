use std::sync::Arc;

use crate::application::ports::{CompletionClient, TranscriptProvider, TranscriptProviderError};
use crate::application::services::{
    FallbackOrchestrator, FallbackResult, OrchestrationError, PromptPayload,
};
use crate::domain::Pattern;

/// Fetches a transcript and runs it through the completion fallback chain
/// with the selected pattern's prompt and timeout.
pub struct SummaryService<P, C>
where
    P: TranscriptProvider,
    C: CompletionClient,
{
    transcript_provider: Arc<P>,
    orchestrator: Arc<FallbackOrchestrator<C>>,
    default_model: String,
}

impl<P, C> SummaryService<P, C>
where
    P: TranscriptProvider,
    C: CompletionClient,
{
    pub fn new(
        transcript_provider: Arc<P>,
        orchestrator: Arc<FallbackOrchestrator<C>>,
        default_model: String,
    ) -> Self {
        Self {
            transcript_provider,
            orchestrator,
            default_model,
        }
    }

    pub async fn summarize(
        &self,
        video_id: &str,
        languages: &[String],
        pattern: Pattern,
        model_override: Option<&str>,
    ) -> Result<SummaryResponse, SummaryError> {
        let transcript = self.transcript_provider.fetch(video_id, languages).await?;
        let text = transcript.joined_text();
        if text.trim().is_empty() {
            return Err(SummaryError::EmptyTranscript);
        }

        let preferred = model_override.unwrap_or(&self.default_model);
        let payload = PromptPayload {
            system_prompt: pattern.system_prompt().to_string(),
            user_content: text,
        };

        tracing::debug!(
            video_id = %video_id,
            pattern = %pattern,
            preferred = %preferred,
            entries = transcript.entries.len(),
            "Summarizing transcript"
        );

        let result = self
            .orchestrator
            .attempt_completion(preferred, &payload, pattern.timeout())
            .await?;

        Ok(SummaryResponse {
            video_id: transcript.video_id,
            language_code: transcript.language_code,
            pattern,
            result,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SummaryResponse {
    pub video_id: String,
    pub language_code: String,
    pub pattern: Pattern,
    pub result: FallbackResult,
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error(transparent)]
    Transcript(#[from] TranscriptProviderError),
    #[error(transparent)]
    Completion(#[from] OrchestrationError),
    #[error("transcript contains no text")]
    EmptyTranscript,
}
