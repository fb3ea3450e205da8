//! Employee API Module
//!
//! 员工管理对所有登录用户开放；列表可见范围由访问策略裁剪
//! (管理员看全部，其他人只看自己的直接下属)。

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/managers", get(handler::manager_candidates))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/assignment", put(handler::update_assignment))
        .route("/{id}/subordinates", get(handler::subordinates))
}
