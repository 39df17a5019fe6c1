//! Upstream agent call: ask the LLM for a free-form itinerary.
//!
//! The only module with network I/O. Prompt text lives in [`crate::prompts`];
//! this module owns retries, timeouts and error mapping.
//!
//! ## Retry Strategy
//!
//! Transient provider errors and timeouts are retried with exponential
//! backoff (`retry_backoff_ms * 2^attempt`). When every attempt fails the
//! last upstream message is surfaced as [`SegmentError::UpstreamFailure`]
//! (or [`SegmentError::UpstreamTimeout`] when the last attempt timed out).

use crate::config::PlannerConfig;
use crate::error::SegmentError;
use crate::pipeline::input::TextContent;
use crate::prompts::{planning_request, DEFAULT_SYSTEM_PROMPT};
use edgequake_llm::{ChatMessage, CompletionOptions, LLMProvider};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, warn};

/// Upper bound on a single retry delay.
const MAX_BACKOFF_MS: u64 = 60_000;

/// Why the last attempt failed.
enum AttemptError {
    Provider(String),
    TimedOut,
}

/// Send `question` to the provider and return the reply text.
pub async fn request_itinerary(
    provider: &Arc<dyn LLMProvider>,
    question: &str,
    config: &PlannerConfig,
) -> Result<String, SegmentError> {
    let start = Instant::now();
    let system_prompt = config
        .system_prompt
        .as_deref()
        .unwrap_or(DEFAULT_SYSTEM_PROMPT);

    let messages = vec![
        ChatMessage::system(system_prompt),
        ChatMessage::user(&planning_request(question)),
    ];
    let options = build_options(config);
    let call_timeout = Duration::from_secs(config.api_timeout_secs);

    let mut last_err: Option<AttemptError> = None;

    for attempt in 0..=config.max_retries {
        if attempt > 0 {
            let backoff = backoff_delay(config.retry_backoff_ms, attempt);
            warn!(
                "Planner: retry {}/{} after {}ms",
                attempt,
                config.max_retries,
                backoff.as_millis()
            );
            sleep(backoff).await;
        }

        match timeout(call_timeout, provider.chat(&messages, Some(&options))).await {
            Ok(Ok(response)) => {
                debug!(
                    "Planner: {} input tokens, {} output tokens, {:?}",
                    response.prompt_tokens,
                    response.completion_tokens,
                    start.elapsed()
                );
                return Ok(response.content.extract_text());
            }
            Ok(Err(e)) => {
                let msg = e.to_string();
                warn!("Planner: attempt {} failed — {}", attempt + 1, msg);
                last_err = Some(AttemptError::Provider(msg));
            }
            Err(_) => {
                warn!(
                    "Planner: attempt {} timed out after {}s",
                    attempt + 1,
                    config.api_timeout_secs
                );
                last_err = Some(AttemptError::TimedOut);
            }
        }
    }

    Err(match last_err {
        Some(AttemptError::TimedOut) => SegmentError::UpstreamTimeout {
            secs: config.api_timeout_secs,
        },
        Some(AttemptError::Provider(message)) => SegmentError::UpstreamFailure { message },
        None => SegmentError::UpstreamFailure {
            message: "Unknown error".to_string(),
        },
    })
}

/// Delay before retry `attempt` (1-based): `base_ms * 2^(attempt-1)`, capped.
fn backoff_delay(base_ms: u64, attempt: u32) -> Duration {
    let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_millis(base_ms.saturating_mul(factor).min(MAX_BACKOFF_MS))
}

/// Build `CompletionOptions` from the planner config.
fn build_options(config: &PlannerConfig) -> CompletionOptions {
    CompletionOptions {
        temperature: Some(config.temperature),
        max_tokens: Some(config.max_tokens),
        ..Default::default()
    }
}
