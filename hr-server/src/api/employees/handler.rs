//! Employee API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use shared::models::{
    AssignmentUpdate, EmployeeCreate, EmployeeDetail, SubordinateEntry,
};

use crate::auth::{CurrentUser, EmployeeScope, policy};
use crate::core::ServerState;
use crate::db::repository::{account, employee};
use crate::utils::time::parse_date;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Resolve the employee record linked to the caller account (matched by
/// email). Callers whose account no longer exists are denied outright.
async fn caller_employee_id(state: &ServerState, user: &CurrentUser) -> AppResult<Option<i64>> {
    let account = account::find_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(AppError::unauthorized)?;
    let employee = employee::find_by_email(&state.pool, &account.email).await?;
    Ok(employee.map(|e| e.id))
}

fn validate_role(state: &ServerState, role: &str) -> AppResult<()> {
    if !state.rank_table.is_known(role) {
        return Err(AppError::validation(format!("Unknown role: {role}")));
    }
    Ok(())
}

/// GET /api/employees - 员工列表 (按访问策略裁剪可见范围)
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<EmployeeDetail>>> {
    let caller_employee = caller_employee_id(&state, &user).await?;
    let scope = policy::employee_scope(&state.rank_table, &user, caller_employee);

    let employees = match scope {
        EmployeeScope::All => employee::find_all(&state.pool).await?,
        EmployeeScope::ReportsOf(manager_id) => {
            employee::find_by_manager(&state.pool, manager_id).await?
        }
        EmployeeScope::Empty => Vec::new(),
    };

    Ok(Json(employees))
}

/// GET /api/employees/managers - 可指派为上级的员工 (按姓名排序)
pub async fn manager_candidates(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<EmployeeDetail>>> {
    let candidates = employee::manager_candidates(&state.pool).await?;
    Ok(Json(candidates))
}

/// GET /api/employees/{id} - 单个员工详情
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeDetail>> {
    let employee = employee::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id}")))?;
    Ok(Json(employee))
}

/// GET /api/employees/{id}/subordinates - 下属列表 (无下属返回空数组)
pub async fn subordinates(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<SubordinateEntry>>> {
    let entries = employee::subordinates(&state.pool, id).await?;
    Ok(Json(entries))
}

/// POST /api/employees - 添加员工
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<EmployeeDetail>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.gender, "gender", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_role(&state, &payload.role)?;
    parse_date(&payload.join_date)?;

    let employee = employee::create(&state.pool, payload).await?;

    tracing::info!(employee_id = employee.id, name = %employee.name, "Employee created");

    Ok(Json(employee))
}

/// PUT /api/employees/{id}/assignment - 修改角色与上级 (角色同步到账号)
pub async fn update_assignment(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<AssignmentUpdate>,
) -> AppResult<Json<EmployeeDetail>> {
    validate_role(&state, &payload.role)?;

    let employee = employee::update_assignment(&state.pool, id, payload).await?;

    Ok(Json(employee))
}

/// DELETE /api/employees/{id} - 删除员工 (有下属时拒绝)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = employee::delete(&state.pool, id).await?;

    tracing::info!(employee_id = id, "Employee deleted");

    Ok(Json(result))
}
