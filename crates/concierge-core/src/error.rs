// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Concierge query classifier.

use thiserror::Error;

/// The primary error type used across all Concierge adapter traits and core operations.
#[derive(Debug, Error)]
pub enum ConciergeError {
    /// The query was empty or blank. Raised before any external call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The model call succeeded but no structured object could be obtained.
    #[error("extraction failed: {0}")]
    ExtractionFailure(String),

    /// Transport, auth or rate-limit failure talking to the hosted model.
    #[error("model call failed: {message}")]
    ModelCall {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Transport failure talking to the search provider.
    ///
    /// Never surfaced to callers of the assistant; it is replaced with a
    /// sentinel result.
    #[error("search failed: {message}")]
    Search {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The model returned an object whose values break the response invariants.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ConciergeError {
    /// Returns true when the error was caused by the caller's input rather
    /// than by the service or one of its collaborators.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ConciergeError::InvalidInput(_))
    }

    /// Shorthand for a [`ConciergeError::ModelCall`] without a source.
    pub fn model_call(message: impl Into<String>) -> Self {
        ConciergeError::ModelCall {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a [`ConciergeError::Search`] without a source.
    pub fn search(message: impl Into<String>) -> Self {
        ConciergeError::Search {
            message: message.into(),
            source: None,
        }
    }
}
