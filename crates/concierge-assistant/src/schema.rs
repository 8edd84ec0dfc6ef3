// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The function schema the model is forced to call.

use concierge_core::types::{IntentCategory, ToolSchema};
use serde_json::json;

/// Name of the forced function.
pub const TOOL_NAME: &str = "AssistantResponse";

/// JSON Schema of [`AssistantResponse`](concierge_core::AssistantResponse) as
/// declared to the model. `entities` is an open object so per-query keys
/// survive.
pub fn response_tool_schema() -> ToolSchema {
    let categories: Vec<String> = IntentCategory::all()
        .iter()
        .map(ToString::to_string)
        .collect();

    ToolSchema {
        name: TOOL_NAME.to_string(),
        description: "Structured classification of the user's query.".to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "intent_category": {
                    "type": "string",
                    "enum": categories,
                    "description": "The category of the user's intent"
                },
                "entities": {
                    "type": ["object", "null"],
                    "additionalProperties": true,
                    "description": "Key entities extracted from the user request (date, time, location, cuisine, party_size, budget, etc.)"
                },
                "confidence_score": {
                    "type": "number",
                    "minimum": 0.0,
                    "maximum": 1.0,
                    "description": "Confidence between 0 and 1 that the query belongs to the intent category"
                },
                "follow_up_questions": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Questions to ask when information in the query is missing or ambiguous"
                }
            },
            "required": ["intent_category", "entities", "confidence_score", "follow_up_questions"]
        }),
    }
}
