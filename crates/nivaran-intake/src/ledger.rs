// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only status ledger over a complaint's lifecycle.

use tracing::info;

use nivaran_core::{Department, NivaranError, SentBy, Status, StatusEvent};
use nivaran_storage::{ComplaintStore, NewStatusUpdate};

/// Records and reads a complaint's status history.
///
/// Every entry is appended, never edited. An entry may carry an explicit
/// status transition, or omit it to post a progress note that re-asserts the
/// complaint's current status.
pub struct StatusLedger {
    store: ComplaintStore,
}

impl StatusLedger {
    pub fn new(store: ComplaintStore) -> Self {
        Self { store }
    }

    /// Append an update to a complaint's history and move its current status.
    ///
    /// `department` is the department posting the update and is recorded on
    /// the event; it does not reroute the complaint.
    pub async fn append_update(
        &self,
        complaint_id: &str,
        department: Department,
        message: &str,
        status: Option<Status>,
        sent_by: SentBy,
    ) -> Result<StatusEvent, NivaranError> {
        if message.trim().is_empty() {
            return Err(NivaranError::Validation(
                "status message must not be empty".into(),
            ));
        }

        let event = self
            .store
            .append_status_update(NewStatusUpdate {
                complaint_id: complaint_id.to_string(),
                department,
                message: message.to_string(),
                status,
                sent_by,
            })
            .await?;
        info!(
            complaint_id,
            status = %event.status,
            sent_by = %event.sent_by,
            "status update recorded"
        );
        Ok(event)
    }

    /// A complaint's full history, oldest first. Empty for an unknown
    /// complaint ID.
    pub async fn updates_for_complaint(
        &self,
        complaint_id: &str,
    ) -> Result<Vec<StatusEvent>, NivaranError> {
        self.store.status_updates_for(complaint_id).await
    }
}
