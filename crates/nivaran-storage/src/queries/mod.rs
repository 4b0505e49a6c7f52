// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed query operations over the complaint database.

pub mod complaints;
pub mod status_updates;
