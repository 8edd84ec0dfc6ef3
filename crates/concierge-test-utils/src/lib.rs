// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Concierge.
//!
//! Provides mock adapters for fast, deterministic tests without network
//! access. Both mocks count their calls so tests can assert that rejected
//! input never reaches an external collaborator.
//!
//! # Components
//!
//! - [`MockModel`] - model adapter replaying queued extractions
//! - [`MockSearch`] - search adapter returning fixed results or failing

pub mod mock_model;
pub mod mock_search;

pub use mock_model::{MockModel, MockReply, sample_response};
pub use mock_search::MockSearch;
