// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for pluggable Nivaran collaborators.

pub mod provider;

pub use provider::ClassifierProvider;
