//! Order API Module
//!
//! 所有路由都需要 Bearer 令牌；查询只返回当前用户的订单。

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        // 状态更新: 任意已认证用户 (餐厅端操作)
        .route("/{id}/status", put(handler::update_status))
}
