// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `concierge classify`: the one-shot form front-end.

use std::path::{Path, PathBuf};

use concierge_assistant::{format_json_response, save_example};
use concierge_config::ConciergeConfig;
use concierge_core::ConciergeError;
use tracing::info;

pub async fn run_classify(
    config: ConciergeConfig,
    query: &str,
    save: Option<&str>,
) -> Result<(), ConciergeError> {
    let assistant = crate::build_assistant(&config).await?;
    let response = assistant.process_query(query).await?;

    println!("{}", format_json_response(&response)?);

    if let Some(name) = save {
        let path = example_path(&config.assistant.examples_dir, name);
        save_example(query, &response, &path)?;
        info!(path = %path.display(), "example saved");
    }
    Ok(())
}

/// `<dir>/<name>.json`; a name already ending in `.json` is used as is.
fn example_path(dir: &str, name: &str) -> PathBuf {
    let file = if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{name}.json")
    };
    Path::new(dir).join(file)
}
