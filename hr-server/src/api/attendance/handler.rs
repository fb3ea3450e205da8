//! Attendance API Handlers

use axum::{Json, extract::State};
use shared::models::{AttendanceCreate, AttendanceEntry, AttendanceRecord};

use crate::core::ServerState;
use crate::db::repository::attendance;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};

/// GET /api/attendance - 考勤记录列表 (按时间倒序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<AttendanceEntry>>> {
    let records = attendance::find_all(&state.pool).await?;
    Ok(Json(records))
}

/// POST /api/attendance - 添加考勤记录 (仅追加)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AttendanceCreate>,
) -> AppResult<Json<AttendanceRecord>> {
    validate_required_text(&payload.kind, "type", MAX_SHORT_TEXT_LEN)?;

    let record = attendance::create(&state.pool, payload).await?;

    Ok(Json(record))
}
