// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `concierge shell`: the chat front-end.
//!
//! Launches a REPL with a colored prompt and readline history. Every line is
//! classified on its own; earlier turns are never sent to the model.

use colored::Colorize;
use concierge_assistant::format::GREETING;
use concierge_assistant::{PersonalAssistant, render_chat_markdown};
use concierge_config::ConciergeConfig;
use concierge_core::ConciergeError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

pub async fn run_shell(config: ConciergeConfig) -> Result<(), ConciergeError> {
    let assistant = crate::build_assistant(&config).await?;

    let mut rl = DefaultEditor::new()
        .map_err(|e| ConciergeError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "concierge shell".bold().green());
    println!("{GREETING}");
    println!("Type {} to exit.\n", "/quit".yellow());

    let prompt = format!("{}> ", "you".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                println!("{}", "Processing your request...".dimmed());
                match respond(&assistant, &line).await {
                    Ok(markdown) => println!("{markdown}\n"),
                    Err(e) => eprintln!("{}: {e}", "error".red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Classifies one chat line as typed and renders the reply as markdown.
async fn respond(assistant: &PersonalAssistant, line: &str) -> Result<String, ConciergeError> {
    let response = assistant.process_query(line).await?;
    render_chat_markdown(&response)
}
