//! Org Integrity Guard
//!
//! Pre-write checks protecting the employee tree and the reference counts
//! behind departments and positions. Mutating repositories call these before
//! committing; a failed check maps to the matching 409 error code and the
//! mutation is never issued.

use std::collections::HashSet;

use shared::ErrorCode;
use sqlx::{SqliteExecutor, SqlitePool};

use super::{RepoError, RepoResult};

/// Count direct reports of an employee
pub async fn subordinate_count(
    executor: impl SqliteExecutor<'_>,
    employee_id: i64,
) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE manager_id = ?")
        .bind(employee_id)
        .fetch_one(executor)
        .await?;
    Ok(count)
}

/// Pre-delete check: an employee with direct reports cannot be removed
pub async fn ensure_no_subordinates(
    executor: impl SqliteExecutor<'_>,
    employee_id: i64,
) -> RepoResult<()> {
    let count = subordinate_count(executor, employee_id).await?;
    if count > 0 {
        return Err(RepoError::Business(
            ErrorCode::EmployeeHasSubordinates,
            format!("Employee {employee_id} has {count} direct report(s), reassign them first"),
        ));
    }
    Ok(())
}

/// Count employees assigned to a department
pub async fn department_employee_count(
    executor: impl SqliteExecutor<'_>,
    department_id: i64,
) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE department_id = ?")
        .bind(department_id)
        .fetch_one(executor)
        .await?;
    Ok(count)
}

/// Pre-delete check: a department with assigned employees cannot be removed
pub async fn ensure_department_unused(
    executor: impl SqliteExecutor<'_>,
    department_id: i64,
) -> RepoResult<()> {
    let count = department_employee_count(executor, department_id).await?;
    if count > 0 {
        return Err(RepoError::Business(
            ErrorCode::DepartmentInUse,
            format!("Department {department_id} still has {count} employee(s)"),
        ));
    }
    Ok(())
}

/// Count employees assigned to a position
pub async fn position_employee_count(
    executor: impl SqliteExecutor<'_>,
    position_id: i64,
) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE position_id = ?")
        .bind(position_id)
        .fetch_one(executor)
        .await?;
    Ok(count)
}

/// Pre-delete check: a position with assigned employees cannot be removed
pub async fn ensure_position_unused(
    executor: impl SqliteExecutor<'_>,
    position_id: i64,
) -> RepoResult<()> {
    let count = position_employee_count(executor, position_id).await?;
    if count > 0 {
        return Err(RepoError::Business(
            ErrorCode::PositionInUse,
            format!("Position {position_id} still has {count} employee(s)"),
        ));
    }
    Ok(())
}

/// Pre-write check for a manager assignment.
///
/// `employee_id` is `None` when the employee row does not exist yet
/// (creation). Rejects:
/// - a manager id that references no employee (`ManagerNotFound`)
/// - assigning an employee as their own manager (`SelfManagement`)
/// - an assignment whose ancestor chain leads back to the employee
///   (`ManagerCycle`)
pub async fn check_manager_assignment(
    pool: &SqlitePool,
    employee_id: Option<i64>,
    manager_id: Option<i64>,
) -> RepoResult<()> {
    let Some(manager_id) = manager_id else {
        return Ok(());
    };

    if employee_id == Some(manager_id) {
        return Err(RepoError::Business(
            ErrorCode::SelfManagement,
            format!("Employee {manager_id} cannot be their own manager"),
        ));
    }

    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM employees WHERE id = ?")
        .bind(manager_id)
        .fetch_optional(pool)
        .await?;
    if exists.is_none() {
        return Err(RepoError::Business(
            ErrorCode::ManagerNotFound,
            format!("Manager {manager_id} does not exist"),
        ));
    }

    // Walk the proposed manager's chain to the root; reaching the employee
    // means the assignment would close a reporting cycle.
    if let Some(employee_id) = employee_id {
        let mut visited = HashSet::new();
        let mut current = manager_id;
        loop {
            if !visited.insert(current) {
                // Pre-existing cycle not involving this employee; stop walking
                break;
            }
            let parent: Option<i64> =
                sqlx::query_scalar("SELECT manager_id FROM employees WHERE id = ?")
                    .bind(current)
                    .fetch_optional(pool)
                    .await?
                    .flatten();
            match parent {
                Some(p) if p == employee_id => {
                    return Err(RepoError::Business(
                        ErrorCode::ManagerCycle,
                        format!(
                            "Assigning manager {manager_id} would make employee {employee_id} \
                             their own transitive manager"
                        ),
                    ));
                }
                Some(p) => current = p,
                None => break,
            }
        }
    }

    Ok(())
}
