// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complaint text validation and classification.
//!
//! Two stages gate every submission:
//!
//! 1. [`validator`] rejects junk text (too short, gibberish, spam) before
//!    any network call is made.
//! 2. [`engine::ComplaintClassifier`] obtains a priority and department
//!    verdict from a model provider, degrading to the deterministic
//!    [`rules`] keyword table when the provider fails.

pub mod engine;
pub mod prompt;
pub mod rules;
pub mod validator;

pub use engine::ComplaintClassifier;
