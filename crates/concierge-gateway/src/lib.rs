// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP API front-end for Concierge.
//!
//! Exposes the classifier over two routes:
//! - `POST /process-query` - classify one query
//! - `GET /health` - liveness probe

pub mod handlers;
pub mod server;

pub use server::{GatewayState, build_router, start_server};
