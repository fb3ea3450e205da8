//! 统一错误处理
//!
//! 应用错误类型来自 `shared::error`；本模块补充仓储层和认证层错误
//! 到 [`AppError`] 的转换。

pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};

use crate::auth::JwtError;
use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Business(code, msg) => AppError::with_message(code, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::ExpiredToken => AppError::token_expired(),
            JwtError::GenerationFailed(msg) => {
                AppError::internal(format!("Token generation failed: {msg}"))
            }
            JwtError::ConfigError(msg) => {
                AppError::with_message(ErrorCode::ConfigError, msg)
            }
            other => AppError::invalid_token(other.to_string()),
        }
    }
}
