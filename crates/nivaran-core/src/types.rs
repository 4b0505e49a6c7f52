// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Nivaran workspace.
//!
//! The string spellings produced by `Display`/serde are part of the external
//! contract: consumers key off exact values such as "In Progress" and
//! "high". Do not rename variants without a data migration.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Municipal department that owns a complaint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Department {
    Police,
    Health,
    Electricity,
    Water,
    Municipality,
    Transport,
}

impl Default for Department {
    /// Provisional owner assigned before classification resolves.
    fn default() -> Self {
        Department::Municipality
    }
}

/// Triage priority of a complaint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank for triage queues: high=1, medium=2, low=3.
    /// Unknown/unset values rank 4 at the query layer.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Low
    }
}

/// Lifecycle state of a complaint.
///
/// "In Progress" (with the space) is the canonical spelling; variants like
/// "Inprogress" are parse errors, not aliases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Status {
    Received,
    #[strum(serialize = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl Default for Status {
    fn default() -> Self {
        Status::Received
    }
}

/// Submission language, which steers text-quality heuristics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Malayalam.
    Ml,
}

/// Origin of a status event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SentBy {
    Admin,
    System,
}

impl Default for SentBy {
    fn default() -> Self {
        SentBy::Admin
    }
}

/// A citizen-submitted issue report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub language: Language,
    pub image_url: Option<String>,
    pub voice_text: Option<String>,
    pub location: Option<String>,
    pub department: Department,
    pub priority: Priority,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

/// Input for a new complaint submission. Classification fields are absent
/// on purpose: they are assigned by the intake pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComplaint {
    pub user_id: String,
    pub text: String,
    pub language: Language,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub voice_text: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// One immutable record in a complaint's status audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub id: i64,
    pub complaint_id: String,
    /// Copied from the complaint at creation time so the trail can be
    /// queried per user without a join.
    pub user_id: String,
    pub department: Department,
    pub message: String,
    pub status: Status,
    pub sent_by: SentBy,
    pub created_at: String,
}

/// Where a classification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationSource {
    Ai,
    Fallback,
}

impl ClassificationSource {
    /// Provenance message carried alongside the classification.
    pub fn message(&self) -> &'static str {
        match self {
            ClassificationSource::Ai => "AI analyzed successfully",
            ClassificationSource::Fallback => "AI analysis failed, using fallback",
        }
    }
}

/// The (priority, department) pair assigned to a complaint, with provenance.
/// Always fully populated; classification never partially resolves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub priority: Priority,
    pub department: Department,
    pub source: ClassificationSource,
}

/// Current UTC time as an RFC3339 string with millisecond precision.
///
/// Stored timestamps are TEXT and compared lexicographically, so every
/// writer must use this exact format.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
