// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation helpers shared by the front-ends.

use std::fmt::Write as _;
use std::path::Path;

use concierge_core::error::ConciergeError;
use concierge_core::types::AssistantResponse;
use serde::Serialize;

/// Greeting shown when a chat session starts.
pub const GREETING: &str = "Hello! I'm your personal assistant. I can understand fuzzy requests like \
'Need a sunset-view table for two tonight; gluten-free menu a must' and turn them into structured information.";

/// Pretty-printed JSON with two-space indentation. Non-ASCII text is kept as is.
pub fn format_json_response<T: Serialize>(value: &T) -> Result<String, ConciergeError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ConciergeError::Internal(format!("failed to serialize response: {e}")))
}

/// Markdown rendering of a response for the chat front-end.
pub fn render_chat_markdown(response: &AssistantResponse) -> Result<String, ConciergeError> {
    let mut out = format!("```json\n{}\n```", format_json_response(response)?);

    if !response.follow_up_questions.is_empty() {
        out.push_str("\n\n**Follow-up questions:**\n");
        for (i, question) in response.follow_up_questions.iter().enumerate() {
            let _ = writeln!(out, "{}. {question}", i + 1);
        }
    }

    if let Some(results) = &response.web_search_results
        && !results.is_empty()
    {
        out.push_str("\n\n**Web search results:**\n");
        for (i, result) in results.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. [{}]({})\n   {}\n",
                i + 1,
                result.title,
                result.link,
                result.snippet
            );
        }
    }

    Ok(out)
}

#[derive(Serialize)]
struct Example<'a> {
    input: &'a str,
    output: &'a AssistantResponse,
}

/// Writes `{"input": .., "output": ..}` to `path` as pretty JSON, creating the
/// parent directory when needed.
pub fn save_example(
    input: &str,
    response: &AssistantResponse,
    path: &Path,
) -> Result<(), ConciergeError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConciergeError::Internal(format!("failed to create {}: {e}", parent.display()))
        })?;
    }

    let json = format_json_response(&Example {
        input,
        output: response,
    })?;
    std::fs::write(path, json)
        .map_err(|e| ConciergeError::Internal(format!("failed to write {}: {e}", path.display())))
}
