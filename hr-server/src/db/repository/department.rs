//! Department Repository

use shared::ErrorCode;
use shared::models::{Department, DepartmentCreate, DepartmentWithCount};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, guard};

/// All departments with their employee counts, ordered by name
pub async fn find_all_with_counts(pool: &SqlitePool) -> RepoResult<Vec<DepartmentWithCount>> {
    let departments = sqlx::query_as::<_, DepartmentWithCount>(
        "SELECT d.id, d.name, d.description, d.created_at, COUNT(e.id) AS employee_count \
         FROM departments d \
         LEFT JOIN employees e ON d.id = e.department_id \
         GROUP BY d.id \
         ORDER BY d.name",
    )
    .fetch_all(pool)
    .await?;
    Ok(departments)
}

/// Find department by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(
        "SELECT id, name, description, created_at FROM departments WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

/// Find department by name
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Department>> {
    let department = sqlx::query_as::<_, Department>(
        "SELECT id, name, description, created_at FROM departments WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(department)
}

/// Create a new department
pub async fn create(pool: &SqlitePool, data: DepartmentCreate) -> RepoResult<Department> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Business(
            ErrorCode::DepartmentNameExists,
            format!("Department '{}' already exists", data.name),
        ));
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO departments (name, description, created_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create department".to_string()))
}

/// Delete a department.
///
/// Refused while any employee references it; check and delete share one
/// transaction.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))?;

    let mut tx = pool.begin().await?;

    guard::ensure_department_unused(&mut *tx, id).await?;

    sqlx::query("DELETE FROM departments WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(true)
}
