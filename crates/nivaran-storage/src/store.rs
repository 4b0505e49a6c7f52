// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed facade over the complaint database.
//!
//! Bundles the [`Database`] handle with the query modules so callers hold
//! one value instead of threading `&Database` through every operation.
//! Cloning shares the underlying connection.

use nivaran_core::{Complaint, Department, NivaranError, Priority, Status, StatusEvent};

use crate::database::Database;
use crate::models::NewStatusUpdate;
use crate::queries;

/// Handle for all complaint and status-history persistence.
#[derive(Clone)]
pub struct ComplaintStore {
    db: Database,
}

impl ComplaintStore {
    /// Open (creating if necessary) the store at `path` and run migrations.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, NivaranError> {
        let db = Database::open_with(path, wal_mode).await?;
        Ok(Self { db })
    }

    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create_complaint(&self, complaint: &Complaint) -> Result<(), NivaranError> {
        queries::complaints::create_complaint(&self.db, complaint).await
    }

    pub async fn complaint(&self, id: &str) -> Result<Option<Complaint>, NivaranError> {
        queries::complaints::get_complaint(&self.db, id).await
    }

    pub async fn complaints_for_user(&self, user_id: &str) -> Result<Vec<Complaint>, NivaranError> {
        queries::complaints::list_for_user(&self.db, user_id).await
    }

    pub async fn complaints_for_department(
        &self,
        department: Department,
    ) -> Result<Vec<Complaint>, NivaranError> {
        queries::complaints::list_for_department(&self.db, department).await
    }

    pub async fn apply_classification(
        &self,
        id: &str,
        priority: Priority,
        department: Department,
    ) -> Result<(), NivaranError> {
        queries::complaints::apply_classification(&self.db, id, priority, department).await
    }

    pub async fn set_status(&self, id: &str, status: Status) -> Result<(), NivaranError> {
        queries::complaints::set_status(&self.db, id, status).await
    }

    pub async fn append_status_update(
        &self,
        update: NewStatusUpdate,
    ) -> Result<StatusEvent, NivaranError> {
        queries::status_updates::append_status_update(&self.db, update).await
    }

    pub async fn status_updates_for(
        &self,
        complaint_id: &str,
    ) -> Result<Vec<StatusEvent>, NivaranError> {
        queries::status_updates::list_for_complaint(&self.db, complaint_id).await
    }

    /// Checkpoint the WAL and close the underlying connection.
    pub async fn close(self) -> Result<(), NivaranError> {
        self.db.close().await
    }
}
