// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./nivaran.toml` > `~/.config/nivaran/nivaran.toml`
//! > `/etc/nivaran/nivaran.toml` with environment variable overrides via the
//! `NIVARAN_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::NivaranConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/nivaran/nivaran.toml` (system-wide)
/// 3. `~/.config/nivaran/nivaran.toml` (user XDG config)
/// 4. `./nivaran.toml` (local directory)
/// 5. `NIVARAN_*` environment variables
pub fn load_config() -> Result<NivaranConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NivaranConfig::default()))
        .merge(Toml::file("/etc/nivaran/nivaran.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("nivaran/nivaran.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("nivaran.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<NivaranConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NivaranConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<NivaranConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(NivaranConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `NIVARAN_GEMINI_API_KEY` must map to
/// `gemini.api_key`, not `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("NIVARAN_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: NIVARAN_STORAGE_DATABASE_PATH -> "storage_database_path"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("classifier_", "classifier.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
