use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{CompletionClient, CompletionError};

/// One system-role instruction plus the user-role transcript payload.
#[derive(Debug, Clone)]
pub struct PromptPayload {
    pub system_prompt: String,
    pub user_content: String,
}

/// Final outcome of a successful orchestration run.
#[derive(Debug, Clone)]
pub struct FallbackResult {
    pub text: String,
    pub model_used: String,
    pub usage: serde_json::Map<String, serde_json::Value>,
    /// True iff the response came from a model other than the requested one.
    pub fallback_used: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    /// A non-429, non-timeout error status. The request would fail
    /// identically against every candidate, so none are tried after it.
    #[error("upstream rejected the request ({status}): {detail}")]
    FatalUpstream { status: u16, detail: String },
    #[error("all {attempts} candidate models exhausted; last error: {last_error}")]
    AllCandidatesExhausted { attempts: usize, last_error: String },
}

/// Builds the trial order for one orchestration run:
/// `[preferred] + [c in chain if c != preferred]`.
///
/// The caller's choice always goes first and is tried exactly once, even
/// when it also appears in the configured chain.
pub fn trial_sequence(preferred: &str, chain: &[String]) -> Vec<String> {
    let mut trials = Vec::with_capacity(chain.len() + 1);
    trials.push(preferred.to_string());
    for candidate in chain {
        if candidate != preferred {
            trials.push(candidate.clone());
        }
    }
    trials
}

/// Tries the preferred model first, then the configured fallback chain,
/// issuing one completion request per candidate and stopping on the first
/// success. Rate limits, timeouts, and malformed responses advance to the
/// next candidate; any other upstream error aborts the run. Candidates are
/// never tried in parallel and never retried.
pub struct FallbackOrchestrator<C>
where
    C: CompletionClient,
{
    client: Arc<C>,
    fallback_chain: Vec<String>,
}

impl<C> FallbackOrchestrator<C>
where
    C: CompletionClient,
{
    pub fn new(client: Arc<C>, fallback_chain: Vec<String>) -> Self {
        Self {
            client,
            fallback_chain,
        }
    }

    pub async fn attempt_completion(
        &self,
        preferred: &str,
        payload: &PromptPayload,
        timeout: Duration,
    ) -> Result<FallbackResult, OrchestrationError> {
        let trials = trial_sequence(preferred, &self.fallback_chain);
        let attempts = trials.len();
        let mut last_error = String::from("no candidates tried");

        for (i, candidate) in trials.iter().enumerate() {
            tracing::debug!(
                model = %candidate,
                attempt = i + 1,
                total = attempts,
                "Trying completion candidate"
            );

            match self
                .client
                .complete(
                    candidate,
                    &payload.system_prompt,
                    &payload.user_content,
                    timeout,
                )
                .await
            {
                Ok(completion) => {
                    let fallback_used = completion.model != preferred;
                    if fallback_used {
                        tracing::info!(
                            requested = %preferred,
                            served_by = %completion.model,
                            "Completion served by fallback model"
                        );
                    }
                    return Ok(FallbackResult {
                        text: completion.text,
                        model_used: completion.model,
                        usage: completion.usage,
                        fallback_used,
                    });
                }
                Err(CompletionError::Upstream { status, detail }) => {
                    tracing::error!(
                        model = %candidate,
                        status = status,
                        "Fatal upstream error, aborting candidate loop"
                    );
                    return Err(OrchestrationError::FatalUpstream { status, detail });
                }
                // RateLimited, TimedOut, RequestFailed, InvalidResponse:
                // transient or ambiguous. Record and advance.
                Err(err) => {
                    tracing::warn!(
                        model = %candidate,
                        error = %err,
                        "Candidate unavailable, advancing to next"
                    );
                    last_error = format!("{}: {}", candidate, err);
                }
            }
        }

        Err(OrchestrationError::AllCandidatesExhausted {
            attempts,
            last_error,
        })
    }
}
