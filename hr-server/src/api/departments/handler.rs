//! Department API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Department, DepartmentCreate, DepartmentWithCount};

use crate::core::ServerState;
use crate::db::repository::department;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_TEXT_LEN, validate_optional_text, validate_required_text};

/// GET /api/departments - 部门列表 (含员工数)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DepartmentWithCount>>> {
    let departments = department::find_all_with_counts(&state.pool).await?;
    Ok(Json(departments))
}

/// POST /api/departments - 添加部门
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_TEXT_LEN)?;

    let department = department::create(&state.pool, payload).await?;

    tracing::info!(department_id = department.id, name = %department.name, "Department created");

    Ok(Json(department))
}

/// DELETE /api/departments/{id} - 删除部门 (有员工时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = department::delete(&state.pool, id).await?;

    tracing::info!(department_id = id, "Department deleted");

    Ok(Json(result))
}
