//! Notice Repository
//!
//! Ownership (author-or-admin) is decided by the access policy in the
//! handler layer; this module only moves rows.

use shared::models::{Notice, NoticeCreate, NoticeEntry};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const ENTRY_SELECT: &str = "SELECT n.id, n.title, n.content, n.author_id, u.username AS author_name, \
     n.priority, n.is_active, n.created_at \
     FROM notices n \
     JOIN users u ON n.author_id = u.id";

/// All notices with author names, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<NoticeEntry>> {
    let notices =
        sqlx::query_as::<_, NoticeEntry>(&format!("{ENTRY_SELECT} ORDER BY n.created_at DESC"))
            .fetch_all(pool)
            .await?;
    Ok(notices)
}

/// Notices published by one author, newest first
pub async fn find_by_author(pool: &SqlitePool, author_id: i64) -> RepoResult<Vec<NoticeEntry>> {
    let notices = sqlx::query_as::<_, NoticeEntry>(&format!(
        "{ENTRY_SELECT} WHERE n.author_id = ? ORDER BY n.created_at DESC"
    ))
    .bind(author_id)
    .fetch_all(pool)
    .await?;
    Ok(notices)
}

/// Find notice by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Notice>> {
    let notice = sqlx::query_as::<_, Notice>(
        "SELECT id, title, content, author_id, priority, is_active, created_at FROM notices WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(notice)
}

/// Publish a new notice
pub async fn create(pool: &SqlitePool, author_id: i64, data: NoticeCreate) -> RepoResult<Notice> {
    let priority = data.priority.unwrap_or_else(|| "normal".to_string());

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO notices (title, content, author_id, priority, is_active, created_at) \
         VALUES (?, ?, ?, ?, 1, ?) RETURNING id",
    )
    .bind(&data.title)
    .bind(&data.content)
    .bind(author_id)
    .bind(&priority)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create notice".to_string()))
}

/// Delete a notice
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM notices WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Notice {id} not found")));
    }
    Ok(true)
}
