//! Position Repository

use shared::ErrorCode;
use shared::models::{Position, PositionCreate};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, guard};

/// All positions, ordered by title
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Position>> {
    let positions = sqlx::query_as::<_, Position>(
        "SELECT id, title, level, description, created_at FROM positions ORDER BY title",
    )
    .fetch_all(pool)
    .await?;
    Ok(positions)
}

/// Find position by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Position>> {
    let position = sqlx::query_as::<_, Position>(
        "SELECT id, title, level, description, created_at FROM positions WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(position)
}

/// Find position by title
pub async fn find_by_title(pool: &SqlitePool, title: &str) -> RepoResult<Option<Position>> {
    let position = sqlx::query_as::<_, Position>(
        "SELECT id, title, level, description, created_at FROM positions WHERE title = ? LIMIT 1",
    )
    .bind(title)
    .fetch_optional(pool)
    .await?;
    Ok(position)
}

/// Create a new position
pub async fn create(pool: &SqlitePool, data: PositionCreate) -> RepoResult<Position> {
    if find_by_title(pool, &data.title).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::PositionTitleExists,
            format!("Position '{}' already exists", data.title),
        ));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO positions (title, level, description, created_at) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.title)
    .bind(&data.level)
    .bind(&data.description)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create position".to_string()))
}

/// Delete a position.
///
/// Refused while any employee references it; check and delete share one
/// transaction.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Position {id} not found")))?;

    let mut tx = pool.begin().await?;

    guard::ensure_position_unused(&mut *tx, id).await?;

    sqlx::query("DELETE FROM positions WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(true)
}
