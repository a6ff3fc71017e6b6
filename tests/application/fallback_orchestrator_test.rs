use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use undertekst::application::ports::{Completion, CompletionClient, CompletionError};
use undertekst::application::services::{
    trial_sequence, FallbackOrchestrator, OrchestrationError, PromptPayload,
};

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Copy)]
enum ScriptedOutcome {
    Success,
    RateLimited,
    TimedOut,
    Fatal(u16),
    Malformed,
}

/// Completion client that replays a scripted outcome per model and records
/// the order in which models were contacted.
struct ScriptedCompletionClient {
    outcomes: HashMap<String, ScriptedOutcome>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedCompletionClient {
    fn new(outcomes: &[(&str, ScriptedOutcome)]) -> Self {
        Self {
            outcomes: outcomes
                .iter()
                .map(|(model, outcome)| (model.to_string(), *outcome))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait::async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(
        &self,
        model: &str,
        _system_prompt: &str,
        _user_content: &str,
        _timeout: Duration,
    ) -> Result<Completion, CompletionError> {
        self.calls.lock().expect("calls lock").push(model.to_string());

        match self.outcomes.get(model).expect("unscripted model") {
            ScriptedOutcome::Success => {
                let mut usage = serde_json::Map::new();
                usage.insert("total_tokens".to_string(), serde_json::json!(42));
                Ok(Completion {
                    text: format!("answer from {}", model),
                    model: model.to_string(),
                    usage,
                })
            }
            ScriptedOutcome::RateLimited => Err(CompletionError::RateLimited),
            ScriptedOutcome::TimedOut => Err(CompletionError::TimedOut),
            ScriptedOutcome::Fatal(status) => Err(CompletionError::Upstream {
                status: *status,
                detail: "invalid_request_error".to_string(),
            }),
            ScriptedOutcome::Malformed => {
                Err(CompletionError::InvalidResponse("truncated body".to_string()))
            }
        }
    }
}

fn payload() -> PromptPayload {
    PromptPayload {
        system_prompt: "summarize".to_string(),
        user_content: "transcript text".to_string(),
    }
}

fn chain(models: &[&str]) -> Vec<String> {
    models.iter().map(|m| m.to_string()).collect()
}

#[test]
fn given_preferred_in_chain_when_building_trials_then_preferred_first_without_duplicates() {
    let trials = trial_sequence("model-b", &chain(&["model-a", "model-b", "model-c"]));
    assert_eq!(trials, vec!["model-b", "model-a", "model-c"]);
}

#[test]
fn given_preferred_outside_chain_when_building_trials_then_chain_follows_preferred() {
    let trials = trial_sequence("model-x", &chain(&["model-a", "model-b"]));
    assert_eq!(trials, vec!["model-x", "model-a", "model-b"]);
}

#[tokio::test]
async fn given_first_candidate_succeeds_when_attempting_then_no_fallback_is_contacted() {
    let client = Arc::new(ScriptedCompletionClient::new(&[
        ("model-a", ScriptedOutcome::Success),
        ("model-b", ScriptedOutcome::Success),
    ]));
    let orchestrator =
        FallbackOrchestrator::new(Arc::clone(&client), chain(&["model-a", "model-b"]));

    let result = orchestrator
        .attempt_completion("model-a", &payload(), TEST_TIMEOUT)
        .await
        .expect("completion");

    assert_eq!(client.calls(), vec!["model-a"]);
    assert_eq!(result.model_used, "model-a");
    assert!(!result.fallback_used);
    assert_eq!(result.text, "answer from model-a");
    assert_eq!(result.usage.get("total_tokens"), Some(&serde_json::json!(42)));
}

#[tokio::test]
async fn given_rate_limit_and_timeout_when_attempting_then_later_candidate_serves_as_fallback() {
    let client = Arc::new(ScriptedCompletionClient::new(&[
        ("model-a", ScriptedOutcome::RateLimited),
        ("model-b", ScriptedOutcome::TimedOut),
        ("model-c", ScriptedOutcome::Success),
    ]));
    let orchestrator = FallbackOrchestrator::new(
        Arc::clone(&client),
        chain(&["model-a", "model-b", "model-c"]),
    );

    let result = orchestrator
        .attempt_completion("model-a", &payload(), TEST_TIMEOUT)
        .await
        .expect("completion");

    assert_eq!(client.calls(), vec!["model-a", "model-b", "model-c"]);
    assert_eq!(result.model_used, "model-c");
    assert!(result.fallback_used);
}

#[tokio::test]
async fn given_malformed_response_when_attempting_then_next_candidate_is_tried() {
    let client = Arc::new(ScriptedCompletionClient::new(&[
        ("model-a", ScriptedOutcome::Malformed),
        ("model-b", ScriptedOutcome::Success),
    ]));
    let orchestrator =
        FallbackOrchestrator::new(Arc::clone(&client), chain(&["model-b"]));

    let result = orchestrator
        .attempt_completion("model-a", &payload(), TEST_TIMEOUT)
        .await
        .expect("completion");

    assert_eq!(client.calls(), vec!["model-a", "model-b"]);
    assert_eq!(result.model_used, "model-b");
    assert!(result.fallback_used);
}

#[tokio::test]
async fn given_fatal_status_when_attempting_then_remaining_candidates_are_skipped() {
    let client = Arc::new(ScriptedCompletionClient::new(&[
        ("model-a", ScriptedOutcome::Fatal(401)),
        ("model-b", ScriptedOutcome::Success),
    ]));
    let orchestrator =
        FallbackOrchestrator::new(Arc::clone(&client), chain(&["model-b"]));

    let err = orchestrator
        .attempt_completion("model-a", &payload(), TEST_TIMEOUT)
        .await
        .expect_err("fatal error");

    assert_eq!(client.calls(), vec!["model-a"]);
    match err {
        OrchestrationError::FatalUpstream { status, detail } => {
            assert_eq!(status, 401);
            assert_eq!(detail, "invalid_request_error");
        }
        other => panic!("expected FatalUpstream, got {:?}", other),
    }
}

#[tokio::test]
async fn given_every_candidate_rate_limited_when_attempting_then_exhausted_after_one_pass() {
    let client = Arc::new(ScriptedCompletionClient::new(&[
        ("model-a", ScriptedOutcome::RateLimited),
        ("model-b", ScriptedOutcome::RateLimited),
        ("model-c", ScriptedOutcome::RateLimited),
    ]));
    let orchestrator = FallbackOrchestrator::new(
        Arc::clone(&client),
        chain(&["model-a", "model-b", "model-c"]),
    );

    let err = orchestrator
        .attempt_completion("model-a", &payload(), TEST_TIMEOUT)
        .await
        .expect_err("exhaustion");

    assert_eq!(client.calls(), vec!["model-a", "model-b", "model-c"]);
    match err {
        OrchestrationError::AllCandidatesExhausted {
            attempts,
            last_error,
        } => {
            assert_eq!(attempts, 3);
            assert!(last_error.contains("model-c"), "{}", last_error);
            assert!(last_error.contains("rate limited"), "{}", last_error);
        }
        other => panic!("expected AllCandidatesExhausted, got {:?}", other),
    }
}

#[tokio::test]
async fn given_usage_missing_upstream_when_succeeding_then_usage_defaults_to_empty() {
    struct NoUsageClient;

    #[async_trait::async_trait]
    impl CompletionClient for NoUsageClient {
        async fn complete(
            &self,
            model: &str,
            _system_prompt: &str,
            _user_content: &str,
            _timeout: Duration,
        ) -> Result<Completion, CompletionError> {
            Ok(Completion {
                text: "ok".to_string(),
                model: model.to_string(),
                usage: serde_json::Map::new(),
            })
        }
    }

    let orchestrator = FallbackOrchestrator::new(Arc::new(NoUsageClient), Vec::new());
    let result = orchestrator
        .attempt_completion("model-a", &payload(), TEST_TIMEOUT)
        .await
        .expect("completion");

    assert!(result.usage.is_empty());
    assert!(!result.fallback_used);
}
