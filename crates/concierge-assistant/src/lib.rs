// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query classification for Concierge.
//!
//! [`PersonalAssistant`] turns one free-text query into an
//! [`AssistantResponse`]: it builds the prompt, asks the model adapter for a
//! schema-constrained extraction, resolves the extraction (parsed object,
//! repaired raw arguments, or failure), validates it, and enriches `other`
//! responses with web search results.
//!
//! The service holds only immutable state and is shared across concurrent
//! requests behind an `Arc`.

pub mod format;
pub mod prompt;
pub mod repair;
pub mod schema;

use std::sync::Arc;
use std::time::Duration;

use concierge_config::model::AssistantConfig;
use concierge_core::error::ConciergeError;
use concierge_core::traits::{ModelAdapter, SearchAdapter};
use concierge_core::types::{AssistantResponse, Extraction, ExtractionRequest, SearchResult};
use tracing::{debug, info, warn};

pub use format::{format_json_response, render_chat_markdown, save_example};
pub use prompt::PromptBuilder;

/// Stateless classifier service.
pub struct PersonalAssistant {
    model: Arc<dyn ModelAdapter>,
    search: Arc<dyn SearchAdapter>,
    prompt: PromptBuilder,
    max_search_results: usize,
    request_timeout: Duration,
}

impl PersonalAssistant {
    /// Creates the service, loading the instruction template named in `config`.
    pub async fn new(
        model: Arc<dyn ModelAdapter>,
        search: Arc<dyn SearchAdapter>,
        config: &AssistantConfig,
    ) -> Self {
        let prompt = PromptBuilder::new(config.instructions_file.as_deref()).await;
        Self::with_prompt(model, search, prompt, config)
    }

    /// Creates the service with an already-built prompt.
    pub fn with_prompt(
        model: Arc<dyn ModelAdapter>,
        search: Arc<dyn SearchAdapter>,
        prompt: PromptBuilder,
        config: &AssistantConfig,
    ) -> Self {
        Self {
            model,
            search,
            prompt,
            max_search_results: config.max_search_results,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Classifies `user_input`.
    ///
    /// Blank input fails with [`ConciergeError::InvalidInput`] before any
    /// external call. The whole operation is bounded by the configured
    /// request timeout; on expiry the in-flight model or search call is
    /// dropped and [`ConciergeError::Timeout`] is returned.
    pub async fn process_query(&self, user_input: &str) -> Result<AssistantResponse, ConciergeError> {
        if user_input.trim().is_empty() {
            return Err(ConciergeError::InvalidInput(
                "Query cannot be empty".to_string(),
            ));
        }

        tokio::time::timeout(self.request_timeout, self.classify(user_input))
            .await
            .map_err(|_| ConciergeError::Timeout {
                duration: self.request_timeout,
            })?
    }

    async fn classify(&self, user_input: &str) -> Result<AssistantResponse, ConciergeError> {
        let request = ExtractionRequest {
            system_prompt: self.prompt.system_prompt(),
            user_message: prompt::user_message(user_input),
            schema: schema::response_tool_schema(),
        };

        let reply = self.model.extract(request).await?;
        debug!(model = reply.model, raw = %reply.raw, "model reply received");

        let mut response = match reply.extraction {
            Extraction::Parsed(parsed) => parsed,
            Extraction::RawToolArgs(args) => {
                debug!("strict parse failed, repairing raw tool arguments");
                repair::repair_tool_args(args)?
            }
            Extraction::Failure(reason) => return Err(ConciergeError::ExtractionFailure(reason)),
        };

        response.validate()?;
        response.normalize();

        if !response.intent_category.is_standard() {
            response.web_search_results =
                Some(self.perform_web_search(user_input, self.max_search_results).await);
        }

        info!(
            intent = %response.intent_category,
            confidence = response.confidence_score,
            follow_ups = response.follow_up_questions.len(),
            "query classified"
        );
        Ok(response)
    }

    /// Searches the web, never failing: provider errors become a single
    /// sentinel result.
    pub async fn perform_web_search(&self, query: &str, max_results: usize) -> Vec<SearchResult> {
        match self.search.search(query, max_results).await {
            Ok(results) if !results.is_empty() => results,
            Ok(_) => {
                warn!("web search returned no results");
                vec![SearchResult::sentinel()]
            }
            Err(e) => {
                warn!(error = %e, "web search error");
                vec![SearchResult::sentinel()]
            }
        }
    }
}
