// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complaint intake orchestration.
//!
//! Wires validation, persistence, and classification into the submission
//! pipeline ([`IntakeService`]) and exposes the append-only status history
//! ([`StatusLedger`]).

pub mod intake;
pub mod ledger;

pub use intake::IntakeService;
pub use ledger::StatusLedger;
