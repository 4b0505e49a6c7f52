// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Nivaran complaint backend.

use thiserror::Error;

/// The primary error type used across all Nivaran crates.
#[derive(Debug, Error)]
pub enum NivaranError {
    /// Submitted input is malformed or the complaint text failed a quality
    /// check. The string carries the exact reason shown to the caller.
    #[error("validation error: {0}")]
    Validation(String),

    /// The referenced complaint does not exist.
    #[error("complaint not found")]
    NotFound,

    /// Storage backend errors (database connection, query failure, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Classification provider errors (API failure, malformed payload).
    /// Never surfaced to submitters; the classifier degrades to its fallback.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A classification call exceeded its bounded timeout.
    #[error("classification timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
