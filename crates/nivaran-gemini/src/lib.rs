// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini classifier provider.
//!
//! Implements [`nivaran_core::ClassifierProvider`] over the Gemini
//! `generateContent` REST API, with API-key authentication and
//! retry-once handling for transient errors.

pub mod client;
pub mod provider;
pub mod types;

pub use client::GeminiClient;
pub use provider::GeminiProvider;
