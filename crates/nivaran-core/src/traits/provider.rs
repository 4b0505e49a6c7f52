// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification provider trait for external language-model backends.

use async_trait::async_trait;

use crate::error::NivaranError;

/// An external language-model backend that analyzes complaint text.
///
/// Implementations take the fully rendered instruction prompt and return the
/// model's raw text output. The caller owns defensive parsing of that output;
/// the provider only reports transport-level failures.
///
/// Providers are injected dependencies: the host process constructs one and
/// passes it into the classification engine, so tests can substitute a
/// double with zero network calls.
#[async_trait]
pub trait ClassifierProvider: Send + Sync {
    /// Human-readable name of this provider (used in logs).
    fn name(&self) -> &str;

    /// Sends the prompt to the model and returns its raw text response.
    async fn analyze(&self, prompt: &str) -> Result<String, NivaranError>;
}
