// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The response data model and the request/result types exchanged with adapters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::error::ConciergeError;

/// Open key-value bag of extracted entities. Keys are chosen per query by the model.
pub type Entities = serde_json::Map<String, serde_json::Value>;

/// The closed set of intent categories a query can be classified into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[strum(serialize_all = "snake_case")]
pub enum IntentCategory {
    Dining,
    Travel,
    Gifting,
    CabBooking,
    Other,
}

impl IntentCategory {
    /// Every category in declaration order.
    pub fn all() -> Vec<IntentCategory> {
        IntentCategory::iter().collect()
    }

    /// Categories that get entity extraction rather than web search.
    pub fn is_standard(&self) -> bool {
        !matches!(self, IntentCategory::Other)
    }
}

impl FromStr for IntentCategory {
    type Err = ConciergeError;

    /// Parses a category literal, tolerating case and `"cab booking"` style separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        IntentCategory::iter()
            .find(|c| c.to_string() == normalized)
            .ok_or_else(|| {
                ConciergeError::SchemaViolation(format!("unrecognized intent category `{s}`"))
            })
    }
}

impl TryFrom<String> for IntentCategory {
    type Error = ConciergeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One web search hit attached to an `other` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

impl SearchResult {
    /// Placeholder returned in place of results when the search provider fails.
    pub fn sentinel() -> Self {
        Self {
            title: "Search error".to_string(),
            link: String::new(),
            snippet: "Unable to perform web search.".to_string(),
        }
    }
}

/// Structured classification of a single user query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantResponse {
    /// The category of the user's intent.
    pub intent_category: IntentCategory,

    /// Entities extracted from the request; `None` for `other`.
    pub entities: Option<Entities>,

    /// Model confidence in the category, within `[0, 1]`.
    pub confidence_score: f64,

    /// Questions to ask when information is missing or ambiguous, most relevant first.
    #[serde(default)]
    pub follow_up_questions: Vec<String>,

    /// Web search hits, present only for `other`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_search_results: Option<Vec<SearchResult>>,
}

impl AssistantResponse {
    /// Checks the value invariants that the type system cannot express.
    pub fn validate(&self) -> Result<(), ConciergeError> {
        let score = self.confidence_score;
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ConciergeError::SchemaViolation(format!(
                "confidence_score must be between 0 and 1, got {score}"
            )));
        }
        Ok(())
    }

    /// Applies the category policy: `other` carries no entities, every other
    /// category carries no search results.
    pub fn normalize(&mut self) {
        if self.intent_category.is_standard() {
            self.web_search_results = None;
        } else {
            self.entities = None;
        }
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of external collaborator an adapter wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum AdapterType {
    Model,
    Search,
}

/// A function schema the model is forced to fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    /// JSON Schema of the function arguments.
    pub parameters: serde_json::Value,
}

/// A schema-constrained extraction request to a hosted model.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub schema: ToolSchema,
}

/// What a model adapter managed to get out of the model, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The arguments deserialized cleanly into a response.
    Parsed(AssistantResponse),
    /// The first tool call carried a JSON object that did not deserialize strictly.
    RawToolArgs(serde_json::Map<String, serde_json::Value>),
    /// Nothing usable came back.
    Failure(String),
}

/// An extraction together with the raw provider payload it came from.
#[derive(Debug, Clone)]
pub struct ExtractionResponse {
    pub extraction: Extraction,
    /// The provider's response body, untouched.
    pub raw: serde_json::Value,
    /// The model that served the request.
    pub model: String,
}
