//! Category API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::CategoryRepository;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use shared::models::{Category, CategoryCreate};

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(Json(categories))
}

/// POST /api/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.color, "color", MAX_SHORT_TEXT_LEN)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
