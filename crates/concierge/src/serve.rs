// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `concierge serve`: runs the HTTP API until SIGINT or SIGTERM.

use concierge_config::ConciergeConfig;
use concierge_core::ConciergeError;
use concierge_gateway::{GatewayState, start_server};
use tracing::info;

use crate::shutdown::install_signal_handler;

pub async fn run_serve(config: ConciergeConfig) -> Result<(), ConciergeError> {
    let assistant = crate::build_assistant(&config).await?;
    let cancel = install_signal_handler();

    info!(
        model = config.openai.model,
        host = config.gateway.host,
        port = config.gateway.port,
        "starting concierge API"
    );

    start_server(&config.gateway, GatewayState { assistant }, cancel).await?;

    info!("concierge API shut down");
    Ok(())
}
