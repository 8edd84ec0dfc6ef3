// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extraction of result entries from the DuckDuckGo HTML page.

use concierge_core::error::ConciergeError;
use concierge_core::types::SearchResult;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

/// Origin used to resolve relative and protocol-relative result links.
const DDG_ORIGIN: &str = "https://duckduckgo.com/";

/// Parses organic results from a DuckDuckGo HTML response, ads excluded.
pub fn parse_results(html: &str) -> Result<Vec<SearchResult>, ConciergeError> {
    let document = Html::parse_document(html);
    let result_sel = selector("div.result")?;
    let title_sel = selector("a.result__a")?;
    let snippet_sel = selector(".result__snippet")?;

    let results = document
        .select(&result_sel)
        .filter(|el| !is_ad(el))
        .filter_map(|el| {
            let anchor = el.select(&title_sel).next()?;
            let title = collapse_text(&anchor);
            let link = anchor
                .value()
                .attr("href")
                .map(decode_link)
                .unwrap_or_default();
            let snippet = el
                .select(&snippet_sel)
                .next()
                .map(|s| collapse_text(&s))
                .unwrap_or_default();
            Some(SearchResult {
                title,
                link,
                snippet,
            })
        })
        .collect();

    Ok(results)
}

fn selector(css: &str) -> Result<Selector, ConciergeError> {
    Selector::parse(css).map_err(|e| ConciergeError::Internal(format!("bad selector {css}: {e}")))
}

fn is_ad(el: &ElementRef<'_>) -> bool {
    el.value().classes().any(|c| c == "result--ad")
}

/// Joins the element's text nodes with single spaces.
fn collapse_text(el: &ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolves a result href to the destination URL.
///
/// DuckDuckGo wraps links as `//duckduckgo.com/l/?uddg=<encoded>`; those are
/// unwrapped, anything else is returned resolved against the DuckDuckGo origin.
pub fn decode_link(href: &str) -> String {
    let Ok(url) = Url::parse(DDG_ORIGIN).and_then(|base| base.join(href)) else {
        return href.to_string();
    };

    if url.path() == "/l/"
        && let Some((_, target)) = url.query_pairs().find(|(k, _)| k == "uddg")
    {
        return target.into_owned();
    }

    url.to_string()
}
