// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search adapter trait for web search providers.

use async_trait::async_trait;

use crate::error::ConciergeError;
use crate::traits::adapter::PluginAdapter;
use crate::types::SearchResult;

/// Adapter for a web search provider.
#[async_trait]
pub trait SearchAdapter: PluginAdapter {
    /// Returns up to `max_results` ranked hits for `query`.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, ConciergeError>;
}
