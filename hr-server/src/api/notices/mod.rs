//! Notice API Module (公司通知)
//!
//! 查看与发布需要 leader 等级；删除对所有登录用户开放，
//! 由访问策略判定 (作者本人或管理员)。

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::rank::ROLE_LEADER;
use crate::auth::require_min_role;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/notices", routes())
}

fn routes() -> Router<ServerState> {
    let leader_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .layer(middleware::from_fn(require_min_role(ROLE_LEADER)));

    let delete_routes =
        Router::new().route("/{id}", axum::routing::delete(handler::delete));

    leader_routes.merge(delete_routes)
}
