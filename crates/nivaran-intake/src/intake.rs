// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complaint submission pipeline.
//!
//! Submission is two-phase: the complaint row is persisted immediately with
//! default triage (low priority, Municipality, Received), then classification
//! patches priority and department in place. A classification or patch
//! failure never loses the complaint; it simply keeps its defaults.

use tracing::{info, warn};
use uuid::Uuid;

use nivaran_classifier::{ComplaintClassifier, validator};
use nivaran_core::{Complaint, Department, NewComplaint, NivaranError, now_rfc3339};
use nivaran_storage::ComplaintStore;

/// Orchestrates complaint validation, persistence, and classification.
pub struct IntakeService {
    store: ComplaintStore,
    classifier: ComplaintClassifier,
}

impl IntakeService {
    pub fn new(store: ComplaintStore, classifier: ComplaintClassifier) -> Self {
        Self { store, classifier }
    }

    /// Submit a new complaint.
    ///
    /// Validates the text, persists the complaint with default triage, then
    /// classifies and patches it. Returns the complaint as stored, with the
    /// classification verdict applied when the patch succeeded.
    pub async fn submit(&self, new: NewComplaint) -> Result<Complaint, NivaranError> {
        validator::validate(&new.text, new.language)
            .map_err(|reason| NivaranError::Validation(reason.to_string()))?;

        let now = now_rfc3339();
        let complaint = Complaint {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            text: new.text,
            language: new.language,
            image_url: new.image_url,
            voice_text: new.voice_text,
            location: new.location,
            department: Default::default(),
            priority: Default::default(),
            status: Default::default(),
            created_at: now.clone(),
            updated_at: now,
        };
        self.store.create_complaint(&complaint).await?;
        info!(complaint_id = %complaint.id, user_id = %complaint.user_id, "complaint received");

        Ok(self.classify_and_patch(complaint).await)
    }

    /// Classify a stored complaint and patch its triage fields. Best-effort:
    /// on patch failure the complaint keeps its default triage.
    async fn classify_and_patch(&self, complaint: Complaint) -> Complaint {
        let classification = self.classifier.classify(&complaint.text).await;
        info!(
            complaint_id = %complaint.id,
            priority = %classification.priority,
            department = %classification.department,
            "{}",
            classification.source.message()
        );

        let patched = self
            .store
            .apply_classification(
                &complaint.id,
                classification.priority,
                classification.department,
            )
            .await;
        match patched {
            Ok(()) => match self.store.complaint(&complaint.id).await {
                Ok(Some(fresh)) => fresh,
                _ => complaint,
            },
            Err(err) => {
                warn!(
                    complaint_id = %complaint.id,
                    error = %err,
                    "classification patch failed, complaint keeps default triage"
                );
                complaint
            }
        }
    }

    /// Fetch one complaint by ID.
    pub async fn complaint(&self, id: &str) -> Result<Complaint, NivaranError> {
        self.store.complaint(id).await?.ok_or(NivaranError::NotFound)
    }

    /// A user's complaints, newest first.
    pub async fn complaints_for_user(&self, user_id: &str) -> Result<Vec<Complaint>, NivaranError> {
        self.store.complaints_for_user(user_id).await
    }

    /// A department's queue: urgent first, newest first within a priority band.
    pub async fn complaints_for_department(
        &self,
        department: Department,
    ) -> Result<Vec<Complaint>, NivaranError> {
        self.store.complaints_for_department(department).await
    }
}
