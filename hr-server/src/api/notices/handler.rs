//! Notice API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use shared::ErrorCode;
use shared::models::{Notice, NoticeCreate, NoticeEntry};

use crate::auth::{CurrentUser, policy};
use crate::core::ServerState;
use crate::db::repository::notice;
use crate::security_log;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/notices - 通知列表 (管理员看全部，其他人看自己发布的)
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<NoticeEntry>>> {
    let notices = if policy::sees_all_notices(&state.rank_table, &user) {
        notice::find_all(&state.pool).await?
    } else {
        notice::find_by_author(&state.pool, user.id).await?
    };

    Ok(Json(notices))
}

/// POST /api/notices - 发布通知
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<NoticeCreate>,
) -> AppResult<Json<Notice>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_required_text(&payload.content, "content", MAX_TEXT_LEN)?;
    validate_optional_text(&payload.priority, "priority", MAX_SHORT_TEXT_LEN)?;

    let notice = notice::create(&state.pool, user.id, payload).await?;

    tracing::info!(notice_id = notice.id, author_id = user.id, "Notice published");

    Ok(Json(notice))
}

/// DELETE /api/notices/{id} - 删除通知 (作者本人或管理员)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let existing = notice::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::NoticeNotFound, format!("Notice {id} not found")))?;

    if !policy::can_delete_notice(&state.rank_table, &user, &existing) {
        security_log!(
            "WARN",
            "notice_delete_denied",
            user_id = user.id,
            notice_id = id,
            author_id = existing.author_id
        );
        return Err(AppError::new(ErrorCode::NoticeNotOwner));
    }

    let result = notice::delete(&state.pool, id).await?;

    tracing::info!(notice_id = id, user_id = user.id, "Notice deleted");

    Ok(Json(result))
}
