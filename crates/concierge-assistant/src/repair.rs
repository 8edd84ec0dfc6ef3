// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lenient conversion of raw tool-call arguments into a response.
//!
//! Used only when strict deserialization failed. Values are coerced where the
//! intent is unambiguous; anything that would break a response invariant is
//! a [`ConciergeError::SchemaViolation`].

use concierge_core::error::ConciergeError;
use concierge_core::types::{AssistantResponse, Entities, IntentCategory};
use serde_json::{Map, Value};

/// Builds a response from loose tool arguments.
pub fn repair_tool_args(mut args: Map<String, Value>) -> Result<AssistantResponse, ConciergeError> {
    let intent_category = intent_category(args.remove("intent_category"))?;
    let confidence_score = confidence_score(args.remove("confidence_score"))?;
    let follow_up_questions = follow_up_questions(args.remove("follow_up_questions"))?;
    let mut entities = entities(args.remove("entities"))?;

    // Search results come from the search provider only.
    args.remove("web_search_results");

    // Entities the model put at the root level.
    if !args.is_empty() {
        let nested = entities.get_or_insert_with(Entities::new);
        for (key, value) in args {
            nested.entry(key).or_insert(value);
        }
    }

    Ok(AssistantResponse {
        intent_category,
        entities,
        confidence_score,
        follow_up_questions,
        web_search_results: None,
    })
}

fn intent_category(value: Option<Value>) -> Result<IntentCategory, ConciergeError> {
    match value {
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(ConciergeError::SchemaViolation(format!(
            "intent_category must be a string, got {other}"
        ))),
        None => Err(ConciergeError::SchemaViolation(
            "missing intent_category".to_string(),
        )),
    }
}

fn confidence_score(value: Option<Value>) -> Result<f64, ConciergeError> {
    let score = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        None => {
            return Err(ConciergeError::SchemaViolation(
                "missing confidence_score".to_string(),
            ));
        }
        Some(_) => None,
    };
    score.ok_or_else(|| {
        ConciergeError::SchemaViolation("confidence_score is not a number".to_string())
    })
}

fn follow_up_questions(value: Option<Value>) -> Result<Vec<String>, ConciergeError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(vec![s]),
        Some(Value::Array(items)) => Ok(items
            .into_iter()
            .filter(|v| !v.is_null())
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect()),
        Some(other) => Err(ConciergeError::SchemaViolation(format!(
            "follow_up_questions must be a list, got {other}"
        ))),
    }
}

fn entities(value: Option<Value>) -> Result<Option<Entities>, ConciergeError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(ConciergeError::SchemaViolation(format!(
            "entities must be an object, got {other}"
        ))),
    }
}
