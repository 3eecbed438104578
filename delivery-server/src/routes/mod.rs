//! 路由组装
//!
//! 中间件顺序 (外 → 内):
//! request id → trace → logging → CORS → compression → auth → handler

pub mod logging;

use axum::{Router, middleware};
use http::HeaderName;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::auth::require_auth;
use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// 合并所有 API 路由 (未绑定状态)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(api::root::router())
        .merge(api::health::router())
        .merge(api::restaurants::router())
        .merge(api::categories::router())
        .merge(api::menu_items::router())
        .merge(api::users::router())
        .merge(api::orders::router())
}

/// 构建完整应用: 路由 + 认证 + HTTP 中间件
pub fn build_app(state: ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router()
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}
