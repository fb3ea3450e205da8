//! Auth API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Auth router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // 公共路由 (require_auth 中间件跳过)
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        // 需认证路由
        .route("/me", get(handler::me))
        .route("/logout", post(handler::logout))
}
