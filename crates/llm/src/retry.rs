use async_trait::async_trait;
use hireflow_common::{HireflowError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::{CompletionRequest, CompletionResponse, LlmClient};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 500,
            max_delay_ms: 30_000,
            backoff_multiplier: 2.0,
        }
    }
}

/// Whether an error is worth retrying.
///
/// Only completion-layer failures can be transient; everything else
/// (configuration, serialization) is fatal. Within completion failures the
/// HTTP status embedded in the message decides.
fn is_transient(error: &HireflowError) -> bool {
    let HireflowError::Completion(msg) = error else {
        return false;
    };
    let lower = msg.to_lowercase();
    lower.contains("429")
        || lower.contains("rate limit")
        || lower.contains("500")
        || lower.contains("502")
        || lower.contains("503")
        || lower.contains("504")
        || lower.contains("server error")
        || lower.contains("bad gateway")
        || lower.contains("service unavailable")
        || lower.contains("gateway timeout")
        || lower.contains("request failed")
}

/// Extract a `Retry-After: N` hint (seconds) from an error message, in ms.
///
/// The search and the slice both happen on the lowercased copy: lowercasing
/// can change byte lengths (e.g. 'İ' becomes two characters), so an index
/// found in one string must not be applied to the other. Digits survive
/// lowercasing unchanged, and the message body is server-controlled text.
fn parse_retry_after(error_msg: &str) -> Option<u64> {
    let lower = error_msg.to_lowercase();
    let pos = lower.find("retry-after")?;
    let after = &lower[pos..];
    for word in after.split_whitespace().skip(1) {
        let cleaned = word.trim_end_matches(|c: char| !c.is_ascii_digit());
        if let Ok(secs) = cleaned.parse::<u64>() {
            return Some(secs * 1000);
        }
    }
    None
}

/// Deterministic jitter based on attempt number; avoids pulling in a rand
/// crate for a 10% spread.
fn jitter_fraction(attempt: u32) -> f64 {
    let x = attempt.wrapping_mul(2654435761);
    (x % 100) as f64 / 100.0
}

/// Wraps an [`LlmClient`] with exponential-backoff retries on transient
/// failures.
pub struct RetryingClient<T: LlmClient> {
    inner: T,
    config: RetryConfig,
}

impl<T: LlmClient> RetryingClient<T> {
    pub fn new(inner: T, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    fn compute_delay(&self, attempt: u32) -> u64 {
        let base = self.config.initial_delay_ms as f64
            * self.config.backoff_multiplier.powi(attempt as i32);
        let jitter = (base * 0.1 * jitter_fraction(attempt)) as u64;
        let delay = (base as u64).saturating_add(jitter);
        delay.min(self.config.max_delay_ms)
    }
}

#[async_trait]
impl<T: LlmClient> LlmClient for RetryingClient<T> {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match self.inner.complete(request.clone()).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if attempt == self.config.max_retries || !is_transient(&e) {
                        return Err(e);
                    }

                    let error_msg = e.to_string();
                    let delay = parse_retry_after(&error_msg)
                        .unwrap_or_else(|| self.compute_delay(attempt));

                    warn!(
                        attempt = attempt + 1,
                        max_retries = self.config.max_retries,
                        delay_ms = delay,
                        error = %error_msg,
                        "Retrying completion request"
                    );

                    tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            HireflowError::Completion("Retry loop exhausted without error".to_string())
        }))
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
