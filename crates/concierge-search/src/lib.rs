// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! DuckDuckGo web search adapter for Concierge.
//!
//! Queries the keyless HTML endpoint and scrapes organic results. Every
//! failure, including a page with no results, is reported as
//! [`ConciergeError::Search`]; the assistant decides how to degrade.

pub mod parse;

use std::time::Duration;

use async_trait::async_trait;
use concierge_config::model::SearchConfig;
use concierge_core::error::ConciergeError;
use concierge_core::traits::{PluginAdapter, SearchAdapter};
use concierge_core::types::{AdapterType, HealthStatus, SearchResult};
use reqwest::Url;
use tracing::debug;

/// Web search over DuckDuckGo's HTML interface.
pub struct DuckDuckGoSearch {
    http: reqwest::Client,
    base_url: String,
    region: String,
}

impl DuckDuckGoSearch {
    pub fn new(config: &SearchConfig) -> Result<Self, ConciergeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ConciergeError::Search {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            region: config.region.clone(),
        })
    }

    fn search_url(&self, query: &str) -> Result<Url, ConciergeError> {
        Url::parse_with_params(&self.base_url, &[("q", query), ("kl", self.region.as_str())])
            .map_err(|e| ConciergeError::Search {
                message: format!("invalid search URL {}: {e}", self.base_url),
                source: Some(Box::new(e)),
            })
    }
}

#[async_trait]
impl PluginAdapter for DuckDuckGoSearch {
    fn name(&self) -> &str {
        "duckduckgo"
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
impl SearchAdapter for DuckDuckGoSearch {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, ConciergeError> {
        let url = self.search_url(query)?;
        debug!(%url, "fetching search results");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ConciergeError::Search {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConciergeError::search(format!(
                "search provider returned {status}"
            )));
        }

        let html = response.text().await.map_err(|e| ConciergeError::Search {
            message: format!("failed to read search response: {e}"),
            source: Some(Box::new(e)),
        })?;

        let mut results = parse::parse_results(&html)?;
        if results.is_empty() {
            return Err(ConciergeError::search("no results found"));
        }
        results.truncate(max_results);

        debug!(count = results.len(), "search results parsed");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn result_block(n: usize) -> String {
        format!(
            r#"<div class="result web-result">
  <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fsite{n}.example%2F">Result {n}</a>
  <a class="result__snippet">Snippet {n}</a>
</div>"#
        )
    }

    fn page(count: usize) -> String {
        let blocks: String = (1..=count).map(result_block).collect();
        format!("<html><body><div class=\"results\">{blocks}</div></body></html>")
    }

    fn adapter(server: &MockServer) -> DuckDuckGoSearch {
        DuckDuckGoSearch::new(&SearchConfig {
            base_url: format!("{}/html/", server.uri()),
            user_agent: "concierge-test".into(),
            ..SearchConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn search_sends_query_and_region() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/html/"))
            .and(query_param("q", "latest ai news"))
            .and(query_param("kl", "wt-wt"))
            .and(header("user-agent", "concierge-test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(2)))
            .expect(1)
            .mount(&server)
            .await;

        let results = adapter(&server).search("latest ai news", 5).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Result 1");
        assert_eq!(results[0].link, "https://site1.example/");
        assert_eq!(results[1].snippet, "Snippet 2");
    }

    #[tokio::test]
    async fn search_truncates_to_max_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(8)))
            .mount(&server)
            .await;

        let results = adapter(&server).search("rust", 5).await.unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(results[4].title, "Result 5");
    }

    #[tokio::test]
    async fn empty_page_is_a_search_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(0)))
            .mount(&server)
            .await;

        let err = adapter(&server).search("nothing", 5).await.unwrap_err();
        assert!(matches!(err, ConciergeError::Search { .. }));
    }

    #[tokio::test]
    async fn non_success_status_is_a_search_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = adapter(&server).search("blocked", 5).await.unwrap_err();
        assert!(err.to_string().contains("403"), "got: {err}");
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_search_error() {
        let search = DuckDuckGoSearch::new(&SearchConfig {
            base_url: "http://127.0.0.1:9/html/".into(),
            timeout_secs: 1,
            ..SearchConfig::default()
        })
        .unwrap();

        let err = search.search("anything", 5).await.unwrap_err();
        assert!(matches!(err, ConciergeError::Search { .. }));
    }
}
