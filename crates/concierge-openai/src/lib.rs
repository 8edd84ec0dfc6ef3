// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI model adapter for Concierge.
//!
//! This crate implements [`ModelAdapter`] over the Chat Completions API using
//! forced function calling: the response schema is declared as a single
//! function tool and `tool_choice` names it, so the structured object arrives
//! as that call's arguments.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use concierge_config::model::OpenAiConfig;
use concierge_core::error::ConciergeError;
use concierge_core::traits::{ModelAdapter, PluginAdapter};
use concierge_core::types::{
    AdapterType, AssistantResponse, Extraction, ExtractionRequest, ExtractionResponse,
    HealthStatus,
};
use tracing::{debug, info};

use crate::client::OpenAiClient;
use crate::types::{
    ChatMessage, ChatRequest, ChatResponse, FunctionDefinition, ToolChoice, ToolDefinition,
};

/// OpenAI model implementing [`ModelAdapter`].
///
/// API key resolution order: config -> `OPENAI_API_KEY` env var -> error,
/// evaluated on every call.
pub struct OpenAiModel {
    client: OpenAiClient,
    model: String,
    temperature: f32,
}

impl OpenAiModel {
    /// Creates the adapter from configuration. Never fails on a missing key.
    pub fn new(config: &OpenAiConfig) -> Result<Self, ConciergeError> {
        let client = OpenAiClient::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.max_retries,
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(model = config.model, "OpenAI model adapter initialized");

        Ok(Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    fn to_chat_request(&self, request: ExtractionRequest) -> ChatRequest {
        let tool_name = request.schema.name.clone();
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(request.system_prompt),
                ChatMessage::user(request.user_message),
            ],
            temperature: self.temperature,
            tools: vec![ToolDefinition {
                tool_type: "function".to_string(),
                function: FunctionDefinition {
                    name: request.schema.name,
                    description: request.schema.description,
                    parameters: request.schema.parameters,
                },
            }],
            tool_choice: Some(ToolChoice::function(tool_name)),
        }
    }
}

#[async_trait]
impl PluginAdapter for OpenAiModel {
    fn name(&self) -> &str {
        "openai"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Model
    }

    async fn health_check(&self) -> Result<HealthStatus, ConciergeError> {
        // No API call: checking the credential is enough and costs nothing.
        if self.client.has_api_key() {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Degraded(
                "no OpenAI API key configured".to_string(),
            ))
        }
    }
}

#[async_trait]
impl ModelAdapter for OpenAiModel {
    async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResponse, ConciergeError> {
        let chat_request = self.to_chat_request(request);
        let (response, raw) = self.client.complete(&chat_request).await?;

        debug!(raw = %raw, "raw model output");

        Ok(ExtractionResponse {
            extraction: resolve_extraction(&response),
            raw,
            model: response.model,
        })
    }
}

/// Classifies the first tool call of `response` into an [`Extraction`].
pub fn resolve_extraction(response: &ChatResponse) -> Extraction {
    let Some(call) = response
        .choices
        .first()
        .and_then(|choice| choice.message.tool_calls.first())
    else {
        return Extraction::Failure("model reply contained no tool call".to_string());
    };

    let args: serde_json::Value = match serde_json::from_str(&call.function.arguments) {
        Ok(value) => value,
        Err(e) => {
            return Extraction::Failure(format!("tool call arguments are not valid JSON: {e}"));
        }
    };

    let serde_json::Value::Object(map) = args else {
        return Extraction::Failure("tool call arguments are not a JSON object".to_string());
    };

    match serde_json::from_value::<AssistantResponse>(serde_json::Value::Object(map.clone())) {
        Ok(parsed) => Extraction::Parsed(parsed),
        Err(e) => {
            debug!(error = %e, "strict parse failed, keeping raw tool arguments");
            Extraction::RawToolArgs(map)
        }
    }
}
