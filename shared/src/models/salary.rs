//! Salary Model (薪资记录)
//!
//! Append-only log; `total` is computed at write time and stored,
//! never recomputed on read.

use serde::{Deserialize, Serialize};

/// Salary record row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SalaryRecord {
    pub id: i64,
    pub employee_id: i64,
    pub base_salary: f64,
    pub bonus: f64,
    pub deduction: f64,
    /// base_salary + bonus - deduction, stored at write time
    pub total: f64,
    /// Pay date (YYYY-MM-DD)
    pub pay_date: String,
    pub created_at: i64,
}

/// Create salary record payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryCreate {
    pub employee_id: i64,
    pub base_salary: f64,
    #[serde(default)]
    pub bonus: f64,
    #[serde(default)]
    pub deduction: f64,
    /// Pay date (YYYY-MM-DD)
    pub pay_date: String,
}

/// Salary list entry with the employee name resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SalaryEntry {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub base_salary: f64,
    pub bonus: f64,
    pub deduction: f64,
    pub total: f64,
    pub pay_date: String,
    pub created_at: i64,
}
