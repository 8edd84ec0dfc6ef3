// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use concierge_core::types::AssistantResponse;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::server::GatewayState;

/// Request body for POST /process-query.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response body for POST /process-query.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub result: AssistantResponse,
}

/// Error body for every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// POST /process-query
///
/// Blank queries are rejected with 400 before the classifier is invoked.
/// Classifier failures of any kind map to 500.
pub async fn process_query(
    State(state): State<GatewayState>,
    Json(body): Json<QueryRequest>,
) -> Response {
    if body.query.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Query cannot be empty".to_string());
    }

    match state.assistant.process_query(&body.query).await {
        Ok(result) => {
            info!(intent = %result.intent_category, "query processed");
            (StatusCode::OK, Json(QueryResponse { result })).into_response()
        }
        Err(e) if e.is_client_error() => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e) => {
            error!(error = %e, "query processing failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error processing query: {e}"),
            )
        }
    }
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

fn error_response(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorResponse { detail })).into_response()
}
