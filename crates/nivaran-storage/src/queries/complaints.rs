// SPDX-FileCopyrightText: 2026 Nivaran Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Complaint CRUD operations.

use nivaran_core::{Complaint, Department, NivaranError, Priority, Status};
use rusqlite::params;

use crate::database::Database;
use crate::models;

const COMPLAINT_COLUMNS: &str = "id, user_id, text, language, image_url, voice_text, location, \
     department, priority, status, created_at, updated_at";

/// Insert a new complaint.
pub async fn create_complaint(db: &Database, complaint: &Complaint) -> Result<(), NivaranError> {
    let complaint = complaint.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO complaints (id, user_id, text, language, image_url, voice_text, \
                 location, department, priority, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    complaint.id,
                    complaint.user_id,
                    complaint.text,
                    complaint.language.to_string(),
                    complaint.image_url,
                    complaint.voice_text,
                    complaint.location,
                    complaint.department.to_string(),
                    complaint.priority.to_string(),
                    complaint.status.to_string(),
                    complaint.created_at,
                    complaint.updated_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a complaint by ID.
pub async fn get_complaint(db: &Database, id: &str) -> Result<Option<Complaint>, NivaranError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE id = ?1"
            ))?;
            let result = stmt.query_row(params![id], models::complaint_from_row);
            match result {
                Ok(complaint) => Ok(Some(complaint)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List a user's complaints, newest first.
pub async fn list_for_user(db: &Database, user_id: &str) -> Result<Vec<Complaint>, NivaranError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COMPLAINT_COLUMNS} FROM complaints
                 WHERE user_id = ?1 ORDER BY created_at DESC"
            ))?;
            let rows = stmt.query_map(params![user_id], models::complaint_from_row)?;
            let mut complaints = Vec::new();
            for row in rows {
                complaints.push(row?);
            }
            Ok(complaints)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List a department's complaints, urgent first, newest first within a
/// priority band. Unknown priority spellings sort last.
pub async fn list_for_department(
    db: &Database,
    department: Department,
) -> Result<Vec<Complaint>, NivaranError> {
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COMPLAINT_COLUMNS} FROM complaints
                 WHERE department = ?1
                 ORDER BY CASE priority
                     WHEN 'high' THEN 1
                     WHEN 'medium' THEN 2
                     WHEN 'low' THEN 3
                     ELSE 4
                 END ASC, created_at DESC"
            ))?;
            let rows = stmt.query_map(params![department.to_string()], models::complaint_from_row)?;
            let mut complaints = Vec::new();
            for row in rows {
                complaints.push(row?);
            }
            Ok(complaints)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Patch a complaint's priority and department after classification.
pub async fn apply_classification(
    db: &Database,
    id: &str,
    priority: Priority,
    department: Department,
) -> Result<(), NivaranError> {
    let id = id.to_string();
    let changed = db
        .connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE complaints
                 SET priority = ?1, department = ?2,
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?3",
                params![priority.to_string(), department.to_string(), id],
            )?;
            Ok(changed)
        })
        .await
        .map_err(crate::database::map_tr_err)?;
    if changed == 0 {
        return Err(NivaranError::NotFound);
    }
    Ok(())
}

/// Overwrite a complaint's status directly, bypassing the status history.
///
/// Status changes should normally go through
/// [`super::status_updates::append_status_update`] so history stays complete.
pub async fn set_status(db: &Database, id: &str, status: Status) -> Result<(), NivaranError> {
    let id = id.to_string();
    let changed = db
        .connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE complaints
                 SET status = ?1, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?2",
                params![status.to_string(), id],
            )?;
            Ok(changed)
        })
        .await
        .map_err(crate::database::map_tr_err)?;
    if changed == 0 {
        return Err(NivaranError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nivaran_core::Language;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn make_complaint(id: &str, created_at: &str) -> Complaint {
        Complaint {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            text: "the street light is broken near the temple".to_string(),
            language: Language::En,
            image_url: None,
            voice_text: None,
            location: Some("MG Road".to_string()),
            department: Department::Municipality,
            priority: Priority::Low,
            status: Status::Received,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_get_complaint_roundtrips() {
        let (db, _dir) = setup_db().await;
        let complaint = make_complaint("c-1", "2026-01-01T00:00:00.000Z");

        create_complaint(&db, &complaint).await.unwrap();
        let retrieved = get_complaint(&db, "c-1").await.unwrap().unwrap();
        assert_eq!(retrieved.id, "c-1");
        assert_eq!(retrieved.user_id, "user-1");
        assert_eq!(retrieved.language, Language::En);
        assert_eq!(retrieved.department, Department::Municipality);
        assert_eq!(retrieved.priority, Priority::Low);
        assert_eq!(retrieved.status, Status::Received);
        assert_eq!(retrieved.location.as_deref(), Some("MG Road"));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_nonexistent_complaint_returns_none() {
        let (db, _dir) = setup_db().await;
        assert!(get_complaint(&db, "no-such-id").await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_for_user_is_newest_first() {
        let (db, _dir) = setup_db().await;
        create_complaint(&db, &make_complaint("c-old", "2026-01-01T00:00:00.000Z"))
            .await
            .unwrap();
        create_complaint(&db, &make_complaint("c-new", "2026-01-02T00:00:00.000Z"))
            .await
            .unwrap();

        let mut other = make_complaint("c-other", "2026-01-03T00:00:00.000Z");
        other.user_id = "user-2".to_string();
        create_complaint(&db, &other).await.unwrap();

        let complaints = list_for_user(&db, "user-1").await.unwrap();
        let ids: Vec<&str> = complaints.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c-new", "c-old"]);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_for_department_orders_by_priority_then_recency() {
        let (db, _dir) = setup_db().await;
        let mut low = make_complaint("c-low", "2026-01-04T00:00:00.000Z");
        low.department = Department::Water;
        let mut high_old = make_complaint("c-high-old", "2026-01-01T00:00:00.000Z");
        high_old.department = Department::Water;
        high_old.priority = Priority::High;
        let mut medium = make_complaint("c-medium", "2026-01-02T00:00:00.000Z");
        medium.department = Department::Water;
        medium.priority = Priority::Medium;
        let mut high_new = make_complaint("c-high-new", "2026-01-03T00:00:00.000Z");
        high_new.department = Department::Water;
        high_new.priority = Priority::High;

        for c in [&low, &high_old, &medium, &high_new] {
            create_complaint(&db, c).await.unwrap();
        }

        let complaints = list_for_department(&db, Department::Water).await.unwrap();
        let ids: Vec<&str> = complaints.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c-high-new", "c-high-old", "c-medium", "c-low"]);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn apply_classification_patches_verdict() {
        let (db, _dir) = setup_db().await;
        create_complaint(&db, &make_complaint("c-1", "2026-01-01T00:00:00.000Z"))
            .await
            .unwrap();

        apply_classification(&db, "c-1", Priority::High, Department::Police)
            .await
            .unwrap();

        let patched = get_complaint(&db, "c-1").await.unwrap().unwrap();
        assert_eq!(patched.priority, Priority::High);
        assert_eq!(patched.department, Department::Police);
        assert!(patched.updated_at >= patched.created_at);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn apply_classification_missing_complaint_is_not_found() {
        let (db, _dir) = setup_db().await;
        let err = apply_classification(&db, "ghost", Priority::High, Department::Police)
            .await
            .unwrap_err();
        assert!(matches!(err, NivaranError::NotFound));
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn set_status_overwrites_current_status() {
        let (db, _dir) = setup_db().await;
        create_complaint(&db, &make_complaint("c-1", "2026-01-01T00:00:00.000Z"))
            .await
            .unwrap();

        set_status(&db, "c-1", Status::Resolved).await.unwrap();
        let updated = get_complaint(&db, "c-1").await.unwrap().unwrap();
        assert_eq!(updated.status, Status::Resolved);

        db.close().await.unwrap();
    }
}
