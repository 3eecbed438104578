//! User API 模块
//!
//! | 路径 | 方法 | 认证 |
//! |------|------|------|
//! | /api/users/register | POST | 无 |
//! | /api/users/login | POST | 无 |
//! | /api/users/profile | GET, PUT | Bearer |
//! | /api/users/addresses | POST | Bearer |
//! | /api/users/addresses/{index} | PUT | Bearer |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/users", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route(
            "/profile",
            get(handler::get_profile).put(handler::update_profile),
        )
        .route("/addresses", post(handler::add_address))
        .route("/addresses/{index}", put(handler::update_address))
}
