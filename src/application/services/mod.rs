mod fallback_orchestrator;
mod summary_service;

pub use fallback_orchestrator::{
    trial_sequence, FallbackOrchestrator, FallbackResult, OrchestrationError, PromptPayload,
};
pub use summary_service::{SummaryError, SummaryResponse, SummaryService};
