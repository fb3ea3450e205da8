//! Attendance Repository
//!
//! Append-only: records are inserted and listed, never updated or deleted.

use shared::ErrorCode;
use shared::models::{AttendanceCreate, AttendanceEntry, AttendanceRecord};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

/// All attendance records with employee names, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<AttendanceEntry>> {
    let records = sqlx::query_as::<_, AttendanceEntry>(
        "SELECT a.id, a.employee_id, e.name AS employee_name, a.type AS kind, a.timestamp \
         FROM attendance a \
         JOIN employees e ON a.employee_id = e.id \
         ORDER BY a.timestamp DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// Find attendance record by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<AttendanceRecord>> {
    let record = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT id, employee_id, type AS kind, timestamp FROM attendance WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

/// Append an attendance record
pub async fn create(pool: &SqlitePool, data: AttendanceCreate) -> RepoResult<AttendanceRecord> {
    if data.kind.trim().is_empty() {
        return Err(RepoError::Business(
            ErrorCode::AttendanceTypeInvalid,
            "Attendance type must not be empty".to_string(),
        ));
    }

    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE id = ?")
        .bind(data.employee_id)
        .fetch_optional(pool)
        .await?;
    if exists.is_none() {
        return Err(RepoError::NotFound(format!(
            "Employee {} not found",
            data.employee_id
        )));
    }

    let timestamp = data.timestamp.unwrap_or_else(now_millis);

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO attendance (employee_id, type, timestamp) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(&data.kind)
    .bind(timestamp)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create attendance record".to_string()))
}
