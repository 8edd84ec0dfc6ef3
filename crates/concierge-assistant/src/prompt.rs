// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System prompt assembly: the classification instructions plus a date and
//! time grounding block rebuilt on every call.

use chrono::{DateTime, Local, TimeZone};
use tracing::{info, warn};

/// Built-in classification instructions.
pub const DEFAULT_INSTRUCTIONS: &str = r#"# Role
You are an advanced personal assistant that understands user queries and extracts structured information from them. Classify each request into an intent category and extract the entities relevant to it.

# Intent Classification Guidelines
- Classify every query into exactly one of: "dining", "travel", "gifting", "cab_booking", "other".
- For the standard categories (dining, travel, gifting, cab_booking), extract every relevant entity from the request.
- Queries that fit none of the standard categories are "other"; web search is performed for them automatically.

# Entity Extraction Guidelines
- dining: location, cuisine, date, time, party_size, budget, restaurant_name, dietary_restrictions and similar, as applicable.
- travel: destination, origin, departure_date, return_date, budget, accommodation_type, transportation_mode, number_of_travelers and similar, as applicable.
- gifting: recipient, occasion, budget, gift_type, delivery_date, preferences and similar, as applicable.
- cab_booking: pickup_location, destination, date, time, number_of_passengers, cab_type and similar, as applicable.
- Choose entity keys to fit the specific query. The lists above are examples, not limits.
- Include entities that are mentioned but unclear, and ask about them in the follow-up questions.

# Response Guidelines
- confidence_score is a number between 0 and 1 expressing certainty about the intent category.
- follow_up_questions lists what to ask when information is missing or ambiguous, most relevant first. Use an empty list when nothing is missing.
- For "other", set entities to null; web search results are attached automatically.

# Response Format
Respond by calling the AssistantResponse function with arguments in exactly this shape:
{
  "intent_category": "one of [dining, travel, gifting, cab_booking, other]",
  "entities": {
    "entity1": "value1",
    "entity2": "value2"
  },
  "confidence_score": 0.85,
  "follow_up_questions": ["question1", "question2"]
}
All extracted entities go inside "entities". Never place them at the root level."#;

/// Holds the instruction text and renders the full system prompt.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    instructions: String,
}

impl PromptBuilder {
    /// Loads instructions from `instructions_file` when it is set and readable,
    /// otherwise uses [`DEFAULT_INSTRUCTIONS`].
    pub async fn new(instructions_file: Option<&str>) -> Self {
        if let Some(path) = instructions_file {
            match tokio::fs::read_to_string(path).await {
                Ok(content) if !content.trim().is_empty() => {
                    info!(path, "loaded classification instructions from file");
                    return Self::with_instructions(content.trim());
                }
                Ok(_) => warn!(path, "instructions file is empty, using built-in instructions"),
                Err(e) => warn!(
                    path,
                    error = %e,
                    "failed to read instructions file, using built-in instructions"
                ),
            }
        }
        Self::with_instructions(DEFAULT_INSTRUCTIONS)
    }

    pub fn with_instructions(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
        }
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// System prompt grounded at the current local time.
    pub fn system_prompt(&self) -> String {
        self.system_prompt_at(&Local::now())
    }

    /// System prompt grounded at `now`.
    pub fn system_prompt_at<Tz>(&self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format!("{}\n\n{}", self.instructions, temporal_block(now))
    }
}

/// Renders the date, time and weekday section of the prompt.
pub fn temporal_block<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "# Current Date and Time\n\
         - Date: {}\n\
         - Time: {}\n\
         - Day of week: {}\n\
         Resolve relative expressions such as \"tonight\", \"tomorrow\" or \"next month\" against this date and time.",
        now.format("%Y-%m-%d"),
        now.format("%H:%M"),
        now.format("%A"),
    )
}

/// Wraps the user's text in the extraction instruction.
pub fn user_message(query: &str) -> String {
    format!("Analyze this user query and return a structured JSON response : {query}")
}
