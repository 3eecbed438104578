//! API 根路由

use axum::{Router, routing::get};

use crate::core::ServerState;
use crate::utils::ApiResponse;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
}

/// GET /api/ - API 存活
pub async fn root() -> ApiResponse<()> {
    ApiResponse::message("Delivery API is running!")
}
