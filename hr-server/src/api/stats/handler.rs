//! Dashboard Stats Handlers

use axum::{Json, extract::State};
use shared::models::DashboardSummary;

use crate::core::ServerState;
use crate::db::repository::{employee, stats};
use crate::utils::AppResult;

/// 工作台显示的最近入职员工数量
const RECENT_EMPLOYEE_LIMIT: i64 = 5;

/// GET /api/stats - 工作台统计与最近入职员工
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Json<DashboardSummary>> {
    let stats = stats::dashboard_stats(&state.pool).await?;
    let recent_employees = employee::find_recent(&state.pool, RECENT_EMPLOYEE_LIMIT).await?;

    Ok(Json(DashboardSummary {
        stats,
        recent_employees,
    }))
}
