mod completion_client;
mod transcript_provider;

pub use completion_client::{Completion, CompletionClient, CompletionError};
pub use transcript_provider::{TranscriptProvider, TranscriptProviderError};
