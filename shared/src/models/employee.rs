//! Employee Model (员工档案)

use serde::{Deserialize, Serialize};

/// Employee row
///
/// `manager_id` is a self-reference into the employee table; the guard layer
/// keeps it acyclic. `role` is the authoritative copy; the linked account's
/// role (matched by email) is derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub department_id: Option<i64>,
    pub position_id: Option<i64>,
    pub manager_id: Option<i64>,
    pub role: String,
    /// Join date (YYYY-MM-DD)
    pub join_date: String,
    pub created_at: i64,
}

/// Employee roster row with resolved reference names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeDetail {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub department_id: Option<i64>,
    pub position_id: Option<i64>,
    pub manager_id: Option<i64>,
    pub role: String,
    pub join_date: String,
    pub created_at: i64,
    pub department_name: Option<String>,
    pub position_title: Option<String>,
    pub manager_name: Option<String>,
}

/// Create employee payload (admin-initiated add)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub department_id: Option<i64>,
    pub position_id: Option<i64>,
    pub manager_id: Option<i64>,
    pub role: String,
    /// Join date (YYYY-MM-DD)
    pub join_date: String,
}

/// Assignment update payload. The edit-role workflow touches role and
/// manager only; the role change propagates to the linked account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentUpdate {
    pub role: String,
    pub manager_id: Option<i64>,
}

/// Subordinate list entry (read API projection, ordered by name)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SubordinateEntry {
    pub id: i64,
    pub name: String,
    pub department_name: Option<String>,
    pub position_title: Option<String>,
}
