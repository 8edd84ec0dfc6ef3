// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Concierge query classifier.
//!
//! This crate provides the response data model, the error type, and the
//! adapter traits for the two external collaborators (hosted model and web
//! search) used throughout the workspace.

pub mod error;
pub mod traits;
pub mod types;

pub use error::ConciergeError;
pub use types::{
    AdapterType, AssistantResponse, Entities, Extraction, ExtractionRequest, ExtractionResponse,
    HealthStatus, IntentCategory, SearchResult, ToolSchema,
};

pub use traits::{ModelAdapter, PluginAdapter, SearchAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    fn dining_response() -> AssistantResponse {
        let mut entities = Entities::new();
        entities.insert("party_size".into(), serde_json::json!(2));
        entities.insert("view".into(), serde_json::json!("sunset"));
        AssistantResponse {
            intent_category: IntentCategory::Dining,
            entities: Some(entities),
            confidence_score: 0.93,
            follow_up_questions: vec!["Which city?".into()],
            web_search_results: None,
        }
    }

    #[test]
    fn intent_category_has_five_variants() {
        let all = IntentCategory::all();
        assert_eq!(all.len(), 5);
        let names: Vec<String> = all.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec!["dining", "travel", "gifting", "cab_booking", "other"]
        );
    }

    #[test]
    fn intent_category_parses_spaced_and_cased_literals() {
        assert_eq!(
            "cab booking".parse::<IntentCategory>().unwrap(),
            IntentCategory::CabBooking
        );
        assert_eq!(
            "Cab-Booking".parse::<IntentCategory>().unwrap(),
            IntentCategory::CabBooking
        );
        assert_eq!(
            " Dining ".parse::<IntentCategory>().unwrap(),
            IntentCategory::Dining
        );
    }

    #[test]
    fn unknown_intent_category_is_schema_violation() {
        let err = "shopping".parse::<IntentCategory>().unwrap_err();
        assert!(matches!(err, ConciergeError::SchemaViolation(_)));
        assert!(err.to_string().contains("shopping"));
    }

    #[test]
    fn intent_category_serializes_as_snake_case() {
        let json = serde_json::to_string(&IntentCategory::CabBooking).unwrap();
        assert_eq!(json, "\"cab_booking\"");
        let parsed: IntentCategory = serde_json::from_str("\"cab booking\"").unwrap();
        assert_eq!(parsed, IntentCategory::CabBooking);
        assert!(serde_json::from_str::<IntentCategory>("\"weather\"").is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_confidence() {
        let mut response = dining_response();
        assert!(response.validate().is_ok());

        response.confidence_score = 1.2;
        assert!(matches!(
            response.validate(),
            Err(ConciergeError::SchemaViolation(_))
        ));

        response.confidence_score = -0.01;
        assert!(response.validate().is_err());

        response.confidence_score = f64::NAN;
        assert!(response.validate().is_err());
    }

    #[test]
    fn validate_accepts_boundaries() {
        let mut response = dining_response();
        response.confidence_score = 0.0;
        assert!(response.validate().is_ok());
        response.confidence_score = 1.0;
        assert!(response.validate().is_ok());
    }

    #[test]
    fn normalize_applies_category_policy() {
        let mut response = dining_response();
        response.web_search_results = Some(vec![SearchResult::sentinel()]);
        response.normalize();
        assert!(response.web_search_results.is_none());
        assert!(response.entities.is_some());

        response.intent_category = IntentCategory::Other;
        response.normalize();
        assert!(response.entities.is_none());
    }

    #[test]
    fn response_json_round_trip() {
        let mut response = dining_response();
        response.intent_category = IntentCategory::Other;
        response.entities = None;
        response.web_search_results = Some(vec![SearchResult {
            title: "AI news".into(),
            link: "https://example.com/ai".into(),
            snippet: "Latest".into(),
        }]);

        let json = serde_json::to_string_pretty(&response).unwrap();
        let parsed: AssistantResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn absent_search_results_are_not_serialized() {
        let json = serde_json::to_value(dining_response()).unwrap();
        assert!(json.get("web_search_results").is_none());
        assert!(json["follow_up_questions"].is_array());
    }

    #[test]
    fn strict_deserialization_rejects_root_level_entities() {
        let json = serde_json::json!({
            "intent_category": "dining",
            "entities": {},
            "confidence_score": 0.5,
            "follow_up_questions": [],
            "cuisine": "thai"
        });
        assert!(serde_json::from_value::<AssistantResponse>(json).is_err());
    }

    #[test]
    fn missing_follow_up_questions_defaults_to_empty() {
        let json = serde_json::json!({
            "intent_category": "travel",
            "entities": null,
            "confidence_score": 0.7
        });
        let parsed: AssistantResponse = serde_json::from_value(json).unwrap();
        assert!(parsed.follow_up_questions.is_empty());
        assert!(parsed.entities.is_none());
    }

    #[test]
    fn sentinel_result_shape() {
        let sentinel = SearchResult::sentinel();
        assert_eq!(sentinel.title, "Search error");
        assert!(sentinel.link.is_empty());
        assert_eq!(sentinel.snippet, "Unable to perform web search.");
    }

    #[test]
    fn only_invalid_input_is_a_client_error() {
        assert!(ConciergeError::InvalidInput("empty".into()).is_client_error());
        assert!(!ConciergeError::ExtractionFailure("none".into()).is_client_error());
        assert!(!ConciergeError::model_call("down").is_client_error());
        assert!(!ConciergeError::search("down").is_client_error());
        assert!(!ConciergeError::SchemaViolation("bad".into()).is_client_error());
        assert!(
            !ConciergeError::Timeout {
                duration: std::time::Duration::from_secs(1)
            }
            .is_client_error()
        );
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_model_adapter<T: ModelAdapter>() {}
        fn _assert_search_adapter<T: SearchAdapter>() {}
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
    }
}
