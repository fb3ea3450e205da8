//! Salary API Handlers

use axum::{Json, extract::State};
use shared::models::{SalaryCreate, SalaryEntry, SalaryRecord};

use crate::core::ServerState;
use crate::db::repository::salary;
use crate::utils::AppResult;
use crate::utils::time::parse_date;

/// GET /api/salaries - 薪资记录列表 (按发薪日倒序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SalaryEntry>>> {
    let records = salary::find_all(&state.pool).await?;
    Ok(Json(records))
}

/// POST /api/salaries - 添加薪资记录 (总额写入时计算)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SalaryCreate>,
) -> AppResult<Json<SalaryRecord>> {
    parse_date(&payload.pay_date)?;

    let record = salary::create(&state.pool, payload).await?;

    Ok(Json(record))
}
