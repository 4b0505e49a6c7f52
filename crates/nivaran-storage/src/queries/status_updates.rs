// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only status history operations.

use nivaran_core::{NivaranError, StatusEvent};
use rusqlite::params;

use crate::database::Database;
use crate::models::{self, NewStatusUpdate};

const EVENT_COLUMNS: &str =
    "id, complaint_id, user_id, department, message, status, sent_by, created_at";

/// Append one entry to a complaint's status history.
///
/// Runs in a single transaction: the history row and the complaint's current
/// status can never diverge. An omitted status re-asserts the complaint's
/// current status (a progress note). The event's user ID is denormalized
/// from the complaint at append time.
pub async fn append_status_update(
    db: &Database,
    update: NewStatusUpdate,
) -> Result<StatusEvent, NivaranError> {
    let event = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;

            let current = {
                let mut stmt =
                    tx.prepare("SELECT user_id, status FROM complaints WHERE id = ?1")?;
                let result = stmt.query_row(params![update.complaint_id], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
                });
                match result {
                    Ok(current) => current,
                    Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                    Err(e) => return Err(e.into()),
                }
            };
            let (user_id, current_status) = current;
            let status = update
                .status
                .map(|s| s.to_string())
                .unwrap_or(current_status);

            tx.execute(
                "INSERT INTO status_updates \
                 (complaint_id, user_id, department, message, status, sent_by, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))",
                params![
                    update.complaint_id,
                    user_id,
                    update.department.to_string(),
                    update.message,
                    status,
                    update.sent_by.to_string(),
                ],
            )?;
            let event_id = tx.last_insert_rowid();

            tx.execute(
                "UPDATE complaints
                 SET status = ?1, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?2",
                params![status, update.complaint_id],
            )?;

            let event = tx.query_row(
                &format!("SELECT {EVENT_COLUMNS} FROM status_updates WHERE id = ?1"),
                params![event_id],
                models::status_event_from_row,
            )?;
            tx.commit()?;
            Ok(Some(event))
        })
        .await
        .map_err(crate::database::map_tr_err)?;
    event.ok_or(NivaranError::NotFound)
}

/// List a complaint's status history, oldest first.
pub async fn list_for_complaint(
    db: &Database,
    complaint_id: &str,
) -> Result<Vec<StatusEvent>, NivaranError> {
    let complaint_id = complaint_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {EVENT_COLUMNS} FROM status_updates
                 WHERE complaint_id = ?1 ORDER BY created_at ASC, id ASC"
            ))?;
            let rows = stmt.query_map(params![complaint_id], models::status_event_from_row)?;
            let mut events = Vec::new();
            for row in rows {
                events.push(row?);
            }
            Ok(events)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::complaints::{create_complaint, get_complaint};
    use nivaran_core::{Complaint, Department, Language, Priority, SentBy, Status};
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    async fn seed_complaint(db: &Database, id: &str) {
        let complaint = Complaint {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            text: "garbage is piling up near the school".to_string(),
            language: Language::En,
            image_url: None,
            voice_text: None,
            location: None,
            department: Department::Municipality,
            priority: Priority::Low,
            status: Status::Received,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
        };
        create_complaint(db, &complaint).await.unwrap();
    }

    #[tokio::test]
    async fn append_records_event_and_moves_status() {
        let (db, _dir) = setup_db().await;
        seed_complaint(&db, "c-1").await;

        let event = append_status_update(
            &db,
            NewStatusUpdate {
                complaint_id: "c-1".to_string(),
                department: Department::Municipality,
                message: "team dispatched".to_string(),
                status: Some(Status::InProgress),
                sent_by: SentBy::Admin,
            },
        )
        .await
        .unwrap();

        assert_eq!(event.complaint_id, "c-1");
        assert_eq!(event.user_id, "user-1");
        assert_eq!(event.department, Department::Municipality);
        assert_eq!(event.status, Status::InProgress);
        assert_eq!(event.sent_by, SentBy::Admin);

        let complaint = get_complaint(&db, "c-1").await.unwrap().unwrap();
        assert_eq!(complaint.status, Status::InProgress);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn omitted_status_reasserts_current() {
        let (db, _dir) = setup_db().await;
        seed_complaint(&db, "c-1").await;

        let event = append_status_update(
            &db,
            NewStatusUpdate {
                complaint_id: "c-1".to_string(),
                department: Department::Municipality,
                message: "acknowledged, inspection scheduled".to_string(),
                status: None,
                sent_by: SentBy::System,
            },
        )
        .await
        .unwrap();

        // Complaint was Received; a progress note keeps it Received.
        assert_eq!(event.status, Status::Received);
        let complaint = get_complaint(&db, "c-1").await.unwrap().unwrap();
        assert_eq!(complaint.status, Status::Received);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn append_to_missing_complaint_is_not_found() {
        let (db, _dir) = setup_db().await;
        let err = append_status_update(
            &db,
            NewStatusUpdate {
                complaint_id: "ghost".to_string(),
                department: Department::Municipality,
                message: "hello".to_string(),
                status: Some(Status::Resolved),
                sent_by: SentBy::Admin,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, NivaranError::NotFound));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn history_lists_oldest_first() {
        let (db, _dir) = setup_db().await;
        seed_complaint(&db, "c-1").await;

        for (message, status) in [
            ("received by control room", None),
            ("team dispatched", Some(Status::InProgress)),
            ("work completed", Some(Status::Resolved)),
        ] {
            append_status_update(
                &db,
                NewStatusUpdate {
                    complaint_id: "c-1".to_string(),
                    department: Department::Municipality,
                    message: message.to_string(),
                    status,
                    sent_by: SentBy::Admin,
                },
            )
            .await
            .unwrap();
        }

        let events = list_for_complaint(&db, "c-1").await.unwrap();
        assert_eq!(events.len(), 3);
        let messages: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["received by control room", "team dispatched", "work completed"]
        );
        assert_eq!(events[0].status, Status::Received);
        assert_eq!(events[2].status, Status::Resolved);

        let complaint = get_complaint(&db, "c-1").await.unwrap().unwrap();
        assert_eq!(complaint.status, Status::Resolved);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn history_of_unknown_complaint_is_empty() {
        let (db, _dir) = setup_db().await;
        let events = list_for_complaint(&db, "ghost").await.unwrap();
        assert!(events.is_empty());
        db.close().await.unwrap();
    }
}
