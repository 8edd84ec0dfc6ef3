// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock model adapter for deterministic testing.
//!
//! `MockModel` implements `ModelAdapter` by replaying queued replies. When
//! the queue is empty it answers with [`Extraction::Failure`].

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use concierge_core::ConciergeError;
use concierge_core::traits::{ModelAdapter, PluginAdapter};
use concierge_core::types::{
    AdapterType, AssistantResponse, Entities, Extraction, ExtractionRequest, ExtractionResponse,
    HealthStatus, IntentCategory,
};

/// One queued reply.
#[derive(Debug)]
pub enum MockReply {
    /// Returned as `Ok` with this extraction.
    Extraction(Extraction),
    /// Returned as a `ModelCall` error with this message.
    Error(String),
}

/// A mock model that replays queued replies and records every request.
pub struct MockModel {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<ExtractionRequest>>>,
}

impl MockModel {
    /// Create a mock with an empty reply queue.
    pub fn new() -> Self {
        Self::with_replies(Vec::new())
    }

    /// Create a mock pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A mock whose single reply is a cleanly parsed response.
    pub fn parsed(response: AssistantResponse) -> Self {
        Self::with_replies(vec![MockReply::Extraction(Extraction::Parsed(response))])
    }

    /// A mock whose single reply is raw tool arguments.
    ///
    /// Non-object values are queued as an empty map.
    pub fn raw(args: serde_json::Value) -> Self {
        let map = match args {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        Self::with_replies(vec![MockReply::Extraction(Extraction::RawToolArgs(map))])
    }

    /// A mock whose single reply is a transport failure.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_replies(vec![MockReply::Error(message.into())])
    }

    /// Add a reply to the end of the queue.
    pub async fn add_reply(&self, reply: MockReply) {
        self.replies.lock().await.push_back(reply);
    }

    /// Number of `extract` calls received so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<ExtractionRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginAdapter for MockModel {
    fn name(&self) -> &str {
        "mock-model"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Model
    }

    async fn health_check(&self) -> Result<HealthStatus, ConciergeError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl ModelAdapter for MockModel {
    async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResponse, ConciergeError> {
        self.requests.lock().await.push(request);

        let reply = self.replies.lock().await.pop_front();
        let extraction = match reply {
            Some(MockReply::Extraction(extraction)) => extraction,
            Some(MockReply::Error(message)) => return Err(ConciergeError::model_call(message)),
            None => Extraction::Failure("no mock reply queued".to_string()),
        };

        Ok(ExtractionResponse {
            extraction,
            raw: serde_json::json!({"mock": true}),
            model: "mock-model".to_string(),
        })
    }
}

/// A plausible response for `category`, as a model would produce it.
///
/// Standard categories carry one entity; `other` carries none.
pub fn sample_response(category: IntentCategory) -> AssistantResponse {
    let entities = category.is_standard().then(|| {
        let mut entities = Entities::new();
        entities.insert("party_size".into(), serde_json::json!(2));
        entities
    });
    AssistantResponse {
        intent_category: category,
        entities,
        confidence_score: 0.9,
        follow_up_questions: vec!["Could you share more details?".to_string()],
        web_search_results: None,
    }
}
