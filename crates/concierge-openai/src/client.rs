// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenAI Chat Completions API.
//!
//! Provides [`OpenAiClient`] which handles authentication, request
//! construction, and retry of transient errors.

use std::time::Duration;

use concierge_core::ConciergeError;
use tracing::{debug, warn};

use crate::types::{ApiErrorResponse, ChatRequest, ChatResponse};

/// Environment variable consulted when no key is configured.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Delay before retrying a transient failure.
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// HTTP client for Chat Completions.
///
/// Holds only immutable settings; the API key is resolved on every call so a
/// missing key fails the call rather than process startup.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - configured key; `None` or empty defers to `OPENAI_API_KEY`
    /// * `base_url` - Chat Completions endpoint
    /// * `max_retries` - retries after a transient status
    /// * `timeout` - per-request HTTP timeout
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        max_retries: u32,
        timeout: Duration,
    ) -> Result<Self, ConciergeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConciergeError::ModelCall {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url,
            max_retries,
            retry_delay: RETRY_DELAY,
        })
    }

    /// Overrides the retry delay (tests use zero).
    #[cfg(test)]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Returns true when a key is configured or present in the environment.
    pub fn has_api_key(&self) -> bool {
        resolve_api_key(self.api_key.as_deref()).is_ok()
    }

    /// Sends a request and returns the parsed response with the raw body.
    ///
    /// On transient errors (429, 500, 503, 529), retries up to `max_retries`
    /// times after a short delay.
    pub async fn complete(
        &self,
        request: &ChatRequest,
    ) -> Result<(ChatResponse, serde_json::Value), ConciergeError> {
        let api_key = resolve_api_key(self.api_key.as_deref())?;
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying completion request after transient error");
                tokio::time::sleep(self.retry_delay).await;
            }

            let response = self
                .client
                .post(&self.base_url)
                .bearer_auth(&api_key)
                .json(request)
                .send()
                .await
                .map_err(|e| ConciergeError::ModelCall {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| ConciergeError::ModelCall {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let raw: serde_json::Value =
                    serde_json::from_str(&body).map_err(|e| ConciergeError::ModelCall {
                        message: format!("response body is not JSON: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                let parsed: ChatResponse = serde_json::from_value(raw.clone()).map_err(|e| {
                    ConciergeError::ModelCall {
                        message: format!("failed to parse API response: {e}"),
                        source: Some(Box::new(e)),
                    }
                })?;
                return Ok((parsed, raw));
            }

            let body = response.text().await.unwrap_or_default();
            if is_transient_error(status) && attempt < self.max_retries {
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(ConciergeError::model_call(format!(
                    "API returned {status}: {body}"
                )));
                continue;
            }

            return Err(ConciergeError::model_call(describe_api_error(status, &body)));
        }

        Err(last_error
            .unwrap_or_else(|| ConciergeError::model_call("completion request failed after retries")))
    }
}

/// Resolves the API key from config, then the environment.
fn resolve_api_key(configured: Option<&str>) -> Result<String, ConciergeError> {
    if let Some(key) = configured
        && !key.is_empty()
    {
        return Ok(key.to_string());
    }

    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(ConciergeError::model_call(format!(
            "OpenAI API key not found. Set openai.api_key in config or the {API_KEY_ENV} environment variable."
        ))),
    }
}

fn describe_api_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(api_err) => format!(
            "OpenAI API error ({}): {}",
            api_err.error.type_.as_deref().unwrap_or("unknown"),
            api_err.error.message
        ),
        Err(_) => format!("API returned {status}: {body}"),
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503 | 529)
}
