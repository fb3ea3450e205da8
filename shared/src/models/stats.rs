//! Dashboard statistics

use serde::{Deserialize, Serialize};

use super::employee::EmployeeDetail;

/// Aggregate counters shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DashboardStats {
    pub total_employees: i64,
    pub total_departments: i64,
    pub total_positions: i64,
    pub today_attendance: i64,
    pub active_notices: i64,
}

/// Dashboard payload: counters plus the most recent joiners
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_employees: Vec<EmployeeDetail>,
}
