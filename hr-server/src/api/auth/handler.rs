//! Authentication Handlers
//!
//! Handles registration, login, and current-user lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use shared::models::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};

use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::repository::account;
use crate::security_log;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/register - 注册账号并自动创建员工档案
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<UserInfo>> {
    validate_required_text(&req.username, "username", MAX_NAME_LEN)?;
    validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;
    validate_required_text(&req.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&req.gender, "gender", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&req.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    if !req.email.contains('@') {
        return Err(AppError::validation(format!(
            "Invalid email address: {}",
            req.email
        )));
    }

    let username = req.username.clone();
    let account = account::register(&state.pool, req).await?;

    tracing::info!(
        account_id = account.id,
        username = %username,
        "Account registered"
    );

    Ok(Json(UserInfo::from(account)))
}

/// POST /api/auth/login - 登录，返回 JWT 令牌
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let found = account::find_by_username(&state.pool, &req.username).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let account = match found {
        Some(account) => {
            let password_valid = password::verify_password(&req.password, &account.password_hash)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                security_log!(
                    "WARN",
                    "login_failed",
                    username = req.username.clone(),
                    reason = "invalid_credentials"
                );
                return Err(AppError::invalid_credentials());
            }

            account
        }
        None => {
            security_log!(
                "WARN",
                "login_failed",
                username = req.username.clone(),
                reason = "user_not_found"
            );
            return Err(AppError::invalid_credentials());
        }
    };

    let jwt_service = state.get_jwt_service();
    let token = jwt_service.generate_token(account.id, &account.username, &account.role)?;

    tracing::info!(
        account_id = account.id,
        username = %account.username,
        role = %account.role,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        token,
        user: UserInfo::from(account),
    }))
}

/// GET /api/auth/me - 当前用户信息 (读库取最新角色)
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<UserInfo>> {
    let account = account::find_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(AppError::unauthorized)?;

    Ok(Json(UserInfo::from(account)))
}

/// POST /api/auth/logout - 登出 (无服务端会话，仅记录)
pub async fn logout(Extension(user): Extension<CurrentUser>) -> AppResult<Json<()>> {
    tracing::info!(
        account_id = user.id,
        username = %user.username,
        "User logged out"
    );

    Ok(Json(()))
}
