// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Row mapping between SQLite and domain types.
//!
//! Enum-valued columns store the canonical wire spelling; a row holding an
//! unknown spelling surfaces as a conversion error rather than a silent
//! default.

use std::str::FromStr;

use nivaran_core::{Complaint, Department, SentBy, Status, StatusEvent};
use rusqlite::Row;

/// Input for appending one entry to a complaint's status history.
#[derive(Debug, Clone)]
pub struct NewStatusUpdate {
    pub complaint_id: String,
    /// Department posting the update, which may differ from the complaint's
    /// owning department.
    pub department: Department,
    pub message: String,
    /// `None` re-asserts the complaint's current status.
    pub status: Option<Status>,
    pub sent_by: SentBy,
}

/// Map a `complaints` row (columns in table order) to a [`Complaint`].
pub fn complaint_from_row(row: &Row<'_>) -> rusqlite::Result<Complaint> {
    Ok(Complaint {
        id: row.get(0)?,
        user_id: row.get(1)?,
        text: row.get(2)?,
        language: parse_enum(3, row.get::<_, String>(3)?)?,
        image_url: row.get(4)?,
        voice_text: row.get(5)?,
        location: row.get(6)?,
        department: parse_enum(7, row.get::<_, String>(7)?)?,
        priority: parse_enum(8, row.get::<_, String>(8)?)?,
        status: parse_enum(9, row.get::<_, String>(9)?)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

/// Map a `status_updates` row (columns in table order) to a [`StatusEvent`].
pub fn status_event_from_row(row: &Row<'_>) -> rusqlite::Result<StatusEvent> {
    Ok(StatusEvent {
        id: row.get(0)?,
        complaint_id: row.get(1)?,
        user_id: row.get(2)?,
        department: parse_enum(3, row.get::<_, String>(3)?)?,
        message: row.get(4)?,
        status: parse_enum(5, row.get::<_, String>(5)?)?,
        sent_by: parse_enum(6, row.get::<_, String>(6)?)?,
        created_at: row.get(7)?,
    })
}

fn parse_enum<T: FromStr>(idx: usize, value: String) -> rusqlite::Result<T> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unrecognized stored value `{value}`").into(),
        )
    })
}
