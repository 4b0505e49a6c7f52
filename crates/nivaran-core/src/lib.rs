// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Nivaran complaint intake backend.
//!
//! This crate provides the domain types, error taxonomy, and the
//! classification-provider trait used throughout the Nivaran workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::NivaranError;
pub use traits::ClassifierProvider;
pub use types::{
    Classification, ClassificationSource, Complaint, Department, Language, NewComplaint,
    Priority, SentBy, Status, StatusEvent, now_rfc3339,
};
