// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock search adapter returning fixed results or a fixed failure.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use concierge_core::ConciergeError;
use concierge_core::traits::{PluginAdapter, SearchAdapter};
use concierge_core::types::{AdapterType, HealthStatus, SearchResult};

/// A mock search provider that records `(query, max_results)` per call.
pub struct MockSearch {
    outcome: Result<Vec<SearchResult>, String>,
    calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MockSearch {
    /// Always returns `results` (truncated to the requested count).
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            outcome: Ok(results),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always returns `count` numbered results.
    pub fn numbered(count: usize) -> Self {
        Self::with_results(
            (1..=count)
                .map(|n| SearchResult {
                    title: format!("Result {n}"),
                    link: format!("https://example.com/{n}"),
                    snippet: format!("Snippet {n}"),
                })
                .collect(),
        )
    }

    /// Always fails with a `Search` error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Every `(query, max_results)` pair received so far.
    pub async fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl PluginAdapter for MockSearch {
    fn name(&self) -> &str {
        "mock-search"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Search
    }

    async fn health_check(&self) -> Result<HealthStatus, ConciergeError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl SearchAdapter for MockSearch {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, ConciergeError> {
        self.calls.lock().await.push((query.to_string(), max_results));
        match &self.outcome {
            Ok(results) => Ok(results.iter().take(max_results).cloned().collect()),
            Err(message) => Err(ConciergeError::search(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn numbered_results_respect_max() {
        let search = MockSearch::numbered(8);
        let results = search.search("q", 3).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(search.calls().await, vec![("q".to_string(), 3)]);
    }

    #[tokio::test]
    async fn failing_search_counts_calls() {
        let search = MockSearch::failing("offline");
        assert!(search.search("q", 5).await.is_err());
        assert_eq!(search.call_count().await, 1);
    }
}
