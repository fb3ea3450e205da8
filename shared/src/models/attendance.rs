//! Attendance Model (考勤记录)
//!
//! Append-only log; no update or delete operations.

use serde::{Deserialize, Serialize};

/// Attendance record row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    /// Record type: "check-in", "check-out", "overtime", "leave"
    #[serde(rename = "type")]
    pub kind: String,
    /// Unix millis
    pub timestamp: i64,
}

/// Create attendance record payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub employee_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    /// Unix millis; defaults to now when omitted
    pub timestamp: Option<i64>,
}

/// Attendance list entry with the employee name resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AttendanceEntry {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: i64,
}
