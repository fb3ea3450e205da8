//! Salary Repository
//!
//! Append-only. `total = base_salary + bonus - deduction` is computed here
//! at write time and stored; reads never recompute it.

use shared::ErrorCode;
use shared::models::{SalaryCreate, SalaryEntry, SalaryRecord};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

fn validate_amount(value: f64, field: &str) -> RepoResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RepoError::Business(
            ErrorCode::SalaryAmountInvalid,
            format!("{field} must be a non-negative finite number, got {value}"),
        ));
    }
    Ok(())
}

/// All salary records with employee names, newest pay date first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<SalaryEntry>> {
    let records = sqlx::query_as::<_, SalaryEntry>(
        "SELECT s.id, s.employee_id, e.name AS employee_name, s.base_salary, s.bonus, \
         s.deduction, s.total, s.pay_date, s.created_at \
         FROM salaries s \
         JOIN employees e ON s.employee_id = e.id \
         ORDER BY s.pay_date DESC, s.id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// Find salary record by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<SalaryRecord>> {
    let record = sqlx::query_as::<_, SalaryRecord>(
        "SELECT id, employee_id, base_salary, bonus, deduction, total, pay_date, created_at \
         FROM salaries WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

/// Append a salary record
pub async fn create(pool: &SqlitePool, data: SalaryCreate) -> RepoResult<SalaryRecord> {
    validate_amount(data.base_salary, "Base salary")?;
    validate_amount(data.bonus, "Bonus")?;
    validate_amount(data.deduction, "Deduction")?;

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

    let total = data.base_salary + data.bonus - data.deduction;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO salaries (employee_id, base_salary, bonus, deduction, total, pay_date, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.base_salary)
    .bind(data.bonus)
    .bind(data.deduction)
    .bind(total)
    .bind(&data.pay_date)
    .bind(now_millis())
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create salary record".to_string()))
}
