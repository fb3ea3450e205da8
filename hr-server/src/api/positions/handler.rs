//! Position API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Position, PositionCreate};

use crate::core::ServerState;
use crate::db::repository::position;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, validate_optional_text, validate_required_text,
};

/// GET /api/positions - 职位列表 (按职称排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Position>>> {
    let positions = position::find_all(&state.pool).await?;
    Ok(Json(positions))
}

/// POST /api/positions - 添加职位
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PositionCreate>,
) -> AppResult<Json<Position>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.level, "level", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_TEXT_LEN)?;

    let position = position::create(&state.pool, payload).await?;

    tracing::info!(position_id = position.id, title = %position.title, "Position created");

    Ok(Json(position))
}

/// DELETE /api/positions/{id} - 删除职位 (有员工时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = position::delete(&state.pool, id).await?;

    tracing::info!(position_id = id, "Position deleted");

    Ok(Json(result))
}
