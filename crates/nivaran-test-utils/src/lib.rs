// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test infrastructure for Nivaran crates.
//!
//! Deterministic [`ClassifierProvider`] doubles so classification and intake
//! tests run fast, offline, and in CI without external API calls.
//!
//! [`ClassifierProvider`]: nivaran_core::ClassifierProvider

mod mock_provider;

pub use mock_provider::{FailingClassifierProvider, MockClassifierProvider};
