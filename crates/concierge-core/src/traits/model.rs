// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model adapter trait for hosted language model integrations.

use async_trait::async_trait;

use crate::error::ConciergeError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{ExtractionRequest, ExtractionResponse};

/// Adapter for a hosted model that supports schema-constrained output.
#[async_trait]
pub trait ModelAdapter: PluginAdapter {
    /// Sends the prompt and schema, returning both the extraction outcome and
    /// the raw payload.
    ///
    /// Transport-level failures are `Err`; a reply without a usable structured
    /// object is `Ok` with [`Extraction::Failure`](crate::types::Extraction::Failure).
    async fn extract(
        &self,
        request: ExtractionRequest,
    ) -> Result<ExtractionResponse, ConciergeError>;
}
