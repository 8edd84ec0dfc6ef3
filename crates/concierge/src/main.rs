// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concierge - classify free-text requests into structured intents.
//!
//! This is the binary entry point. It loads configuration, wires the model
//! and search adapters into the classifier, and dispatches to one of three
//! front-ends: the HTTP API, the chat shell, or a one-shot classification.

mod classify;
mod serve;
mod shell;
mod shutdown;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use concierge_assistant::PersonalAssistant;
use concierge_config::ConciergeConfig;
use concierge_core::ConciergeError;
use concierge_openai::OpenAiModel;
use concierge_search::DuckDuckGoSearch;

/// Concierge - classify free-text requests into structured intents.
#[derive(Parser, Debug)]
#[command(name = "concierge", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP API server.
    Serve,
    /// Launch an interactive chat session.
    Shell,
    /// Classify one query and print the JSON response.
    Classify {
        /// The request to classify.
        query: String,
        /// Also save the input/output pair as `<examples_dir>/<NAME>.json`.
        #[arg(long, value_name = "NAME")]
        save: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => concierge_config::load_and_validate_path(path),
        None => concierge_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            concierge_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.assistant.log_level);

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Shell) => shell::run_shell(config).await,
        Some(Commands::Classify { query, save }) => {
            classify::run_classify(config, &query, save.as_deref()).await
        }
        None => {
            println!("concierge: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Builds the classifier with the OpenAI and DuckDuckGo adapters.
async fn build_assistant(config: &ConciergeConfig) -> Result<Arc<PersonalAssistant>, ConciergeError> {
    let model = Arc::new(OpenAiModel::new(&config.openai)?);
    let search = Arc::new(DuckDuckGoSearch::new(&config.search)?);
    Ok(Arc::new(
        PersonalAssistant::new(model, search, &config.assistant).await,
    ))
}

/// Initializes the tracing subscriber on stderr, leaving stdout for output.
///
/// `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("concierge={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn classify_accepts_save_name() {
        let cli = Cli::try_parse_from(["concierge", "classify", "table for two", "--save", "dining"])
            .unwrap();
        match cli.command {
            Some(Commands::Classify { query, save }) => {
                assert_eq!(query, "table for two");
                assert_eq!(save.as_deref(), Some("dining"));
            }
            other => panic!("expected classify, got {other:?}"),
        }
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["concierge", "serve", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[tokio::test]
    async fn assistant_builds_without_api_key() {
        let config = ConciergeConfig::default();
        assert!(build_assistant(&config).await.is_ok());
    }
}
