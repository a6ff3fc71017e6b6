use std::sync::Arc;

use crate::application::ports::{CompletionClient, TranscriptProvider};
use crate::application::services::SummaryService;
use crate::presentation::config::Settings;

pub struct AppState<P, C>
where
    P: TranscriptProvider,
    C: CompletionClient,
{
    pub transcript_provider: Arc<P>,
    pub summary_service: Arc<SummaryService<P, C>>,
    pub settings: Settings,
}

impl<P, C> Clone for AppState<P, C>
where
    P: TranscriptProvider,
    C: CompletionClient,
{
    fn clone(&self) -> Self {
        Self {
            transcript_provider: Arc::clone(&self.transcript_provider),
            summary_service: Arc::clone(&self.summary_service),
            settings: self.settings.clone(),
        }
    }
}
