//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::{MenuItemRepository, RestaurantFilter, RestaurantRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_id, validate_optional_text, validate_required_text,
    validate_text_len,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, Restaurant, RestaurantCreate, RestaurantQuery, RestaurantUpdate};

const RESOURCE: &str = "restaurant";

/// GET /api/restaurants - 餐厅列表 (?category=&search=)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RestaurantQuery>,
) -> AppResult<Json<Vec<Restaurant>>> {
    let filter = RestaurantFilter::from_query(&query);
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurants = repo.find_all(&filter).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/{id} - 获取单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Restaurant>> {
    validate_id(&id, RESOURCE)?;
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;
    Ok(Json(restaurant))
}

/// POST /api/restaurants - 创建餐厅
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<(StatusCode, Json<Restaurant>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_text_len(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.create(payload).await?;

    tracing::info!(restaurant_id = %restaurant.id, name = %restaurant.name, "Restaurant created");
    Ok((StatusCode::CREATED, Json(restaurant)))
}

/// PUT /api/restaurants/{id} - 部分更新
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RestaurantUpdate>,
) -> AppResult<Json<Restaurant>> {
    validate_id(&id, RESOURCE)?;
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.cuisine, "cuisine", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo
        .update(&id, payload)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;
    Ok(Json(restaurant))
}

/// DELETE /api/restaurants/{id} - 删除餐厅
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    validate_id(&id, RESOURCE)?;
    let repo = RestaurantRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::new(ErrorCode::RestaurantNotFound));
    }

    tracing::info!(restaurant_id = %id, "Restaurant deleted");
    Ok(ApiResponse::message("Restaurant deleted successfully"))
}

/// GET /api/restaurants/{id}/menu - 餐厅菜单
///
/// 餐厅不存在时返回空列表
pub async fn menu(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    validate_id(&id, RESOURCE)?;
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_by_restaurant(&id).await?;
    Ok(Json(items))
}
