use std::time::Duration;

use async_trait::async_trait;

/// A successful completion from an upstream model.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    /// The candidate identifier this request was issued against.
    pub model: String,
    /// Usage statistics passed through verbatim from the upstream response;
    /// empty when the upstream omits them.
    pub usage: serde_json::Map<String, serde_json::Value>,
}

/// One completion backend reachable over an OpenAI-compatible API.
///
/// Implementations classify the HTTP-level outcome into `CompletionError`
/// variants; they never retry or fall back themselves.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_content: &str,
        timeout: Duration,
    ) -> Result<Completion, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("rate limited")]
    RateLimited,
    #[error("request timed out")]
    TimedOut,
    /// Any non-429 error status. Assumed to be a request-shape or auth
    /// problem that would recur identically against every model.
    #[error("upstream returned {status}: {detail}")]
    Upstream { status: u16, detail: String },
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
