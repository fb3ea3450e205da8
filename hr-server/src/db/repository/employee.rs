//! Employee Repository
//!
//! Roster queries resolve department/position/manager names through LEFT
//! JOINs; mutations run the org-integrity checks first and multi-entity
//! writes (delete, role+manager assignment) are transactional.

use shared::ErrorCode;
use shared::models::{AssignmentUpdate, Employee, EmployeeCreate, EmployeeDetail, SubordinateEntry};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, guard};
use crate::auth::rank::MANAGER_ROLES;

const DETAIL_SELECT: &str = "SELECT e.id, e.name, e.gender, e.phone, e.email, \
     e.department_id, e.position_id, e.manager_id, e.role, e.join_date, e.created_at, \
     d.name AS department_name, p.title AS position_title, m.name AS manager_name \
     FROM employees e \
     LEFT JOIN departments d ON e.department_id = d.id \
     LEFT JOIN positions p ON e.position_id = p.id \
     LEFT JOIN employees m ON e.manager_id = m.id";

/// Full roster with resolved names, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<EmployeeDetail>> {
    let employees = sqlx::query_as::<_, EmployeeDetail>(&format!(
        "{DETAIL_SELECT} ORDER BY e.created_at DESC, e.id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Direct reports of a manager, newest first; empty when there are none
pub async fn find_by_manager(pool: &SqlitePool, manager_id: i64) -> RepoResult<Vec<EmployeeDetail>> {
    let employees = sqlx::query_as::<_, EmployeeDetail>(&format!(
        "{DETAIL_SELECT} WHERE e.manager_id = ? ORDER BY e.created_at DESC, e.id DESC"
    ))
    .bind(manager_id)
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Most recent joiners (dashboard)
pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<EmployeeDetail>> {
    let employees = sqlx::query_as::<_, EmployeeDetail>(&format!(
        "{DETAIL_SELECT} ORDER BY e.join_date DESC, e.id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

/// Find employee by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, gender, phone, email, department_id, position_id, manager_id, role, join_date, created_at FROM employees WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Find employee by id with resolved names
pub async fn find_detail_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<EmployeeDetail>> {
    let employee = sqlx::query_as::<_, EmployeeDetail>(&format!("{DETAIL_SELECT} WHERE e.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

/// Find the employee profile linked to an account email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, gender, phone, email, department_id, position_id, manager_id, role, join_date, created_at FROM employees WHERE email = ? LIMIT 1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Employees eligible to be assigned as managers, ordered by name
pub async fn manager_candidates(pool: &SqlitePool) -> RepoResult<Vec<EmployeeDetail>> {
    let placeholders = MANAGER_ROLES.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
    let sql = format!("{DETAIL_SELECT} WHERE e.role IN ({placeholders}) ORDER BY e.name");

    let mut query = sqlx::query_as::<_, EmployeeDetail>(&sql);
    for role in MANAGER_ROLES {
        query = query.bind(*role);
    }

    let employees = query.fetch_all(pool).await?;
    Ok(employees)
}

/// Subordinate projection for the read API, ordered by name.
///
/// Returns an empty vec (never an error) when the manager has no reports.
pub async fn subordinates(pool: &SqlitePool, manager_id: i64) -> RepoResult<Vec<SubordinateEntry>> {
    let entries = sqlx::query_as::<_, SubordinateEntry>(
        "SELECT e.id, e.name, d.name AS department_name, p.title AS position_title \
         FROM employees e \
         LEFT JOIN departments d ON e.department_id = d.id \
         LEFT JOIN positions p ON e.position_id = p.id \
         WHERE e.manager_id = ? \
         ORDER BY e.name",
    )
    .bind(manager_id)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

/// Create a new employee
pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<EmployeeDetail> {
    // Referenced rows must exist before the insert is attempted
    if let Some(department_id) = data.department_id {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM departments WHERE id = ?")
            .bind(department_id)
            .fetch_optional(pool)
            .await?;
        if exists.is_none() {
            return Err(RepoError::Business(
                ErrorCode::DepartmentNotFound,
                format!("Department {department_id} does not exist"),
            ));
        }
    }
    if let Some(position_id) = data.position_id {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM positions WHERE id = ?")
            .bind(position_id)
            .fetch_optional(pool)
            .await?;
        if exists.is_none() {
            return Err(RepoError::Business(
                ErrorCode::PositionNotFound,
                format!("Position {position_id} does not exist"),
            ));
        }
    }
    guard::check_manager_assignment(pool, None, data.manager_id).await?;

    let now = now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employees (name, gender, phone, email, department_id, position_id, manager_id, role, join_date, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.gender)
    .bind(&data.phone)
    .bind(&data.email)
    .bind(data.department_id)
    .bind(data.position_id)
    .bind(data.manager_id)
    .bind(&data.role)
    .bind(&data.join_date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_detail_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
}

/// Update an employee's role and manager (the edit-role workflow).
///
/// The employee row and the linked account (matched by email) are updated in
/// one transaction: the role lands on both sides or on neither. An employee
/// without a matching account still commits; any store failure inside the
/// unit rolls everything back and surfaces as `RoleSyncFailed`.
pub async fn update_assignment(
    pool: &SqlitePool,
    id: i64,
    data: AssignmentUpdate,
) -> RepoResult<EmployeeDetail> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;

    guard::check_manager_assignment(pool, Some(id), data.manager_id).await?;

    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE employees SET role = ?, manager_id = ? WHERE id = ?")
        .bind(&data.role)
        .bind(data.manager_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            RepoError::Business(
                ErrorCode::RoleSyncFailed,
                format!("Failed to update employee {id}: {e}"),
            )
        })?;

    // Propagate the role to the account sharing this employee's email.
    // Zero matched rows is fine: sync is best-effort on the account side.
    sqlx::query("UPDATE users SET role = ? WHERE email = ?")
        .bind(&data.role)
        .bind(&existing.email)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            RepoError::Business(
                ErrorCode::RoleSyncFailed,
                format!("Failed to sync role to account for employee {id}: {e}"),
            )
        })?;

    tx.commit().await.map_err(|e| {
        RepoError::Business(
            ErrorCode::RoleSyncFailed,
            format!("Failed to commit role change for employee {id}: {e}"),
        )
    })?;

    tracing::info!(
        employee_id = id,
        role = %data.role,
        manager_id = ?data.manager_id,
        "Employee assignment updated (role synced to account)"
    );

    find_detail_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Delete an employee.
///
/// The subordinate check and the delete run in one transaction.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;

    let mut tx = pool.begin().await?;

    guard::ensure_no_subordinates(&mut *tx, id).await?;

    sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(true)
}
