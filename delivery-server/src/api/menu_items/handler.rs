//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::{MenuItemRepository, RestaurantRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_id, validate_optional_text, validate_required_text,
    validate_text_len,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

const RESOURCE: &str = "menu item";

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::validation("price must be a non-negative number")
            .with_detail("field", "price"));
    }
    Ok(())
}

/// POST /api/menu-items - 创建菜品 (餐厅必须存在)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    validate_id(&payload.restaurant_id, "restaurant")?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_text_len(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_price(payload.price)?;

    let restaurants = RestaurantRepository::new(state.db.clone());
    if !restaurants.exists(&payload.restaurant_id).await? {
        return Err(AppError::new(ErrorCode::RestaurantNotFound));
    }

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/menu-items/{id} - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    validate_id(&id, RESOURCE)?;
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    Ok(Json(item))
}

/// PUT /api/menu-items/{id} - 部分更新
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    validate_id(&id, RESOURCE)?;
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if let Some(price) = payload.price {
        validate_price(price)?;
    }

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .update(&id, payload)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound))?;
    Ok(Json(item))
}

/// DELETE /api/menu-items/{id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    validate_id(&id, RESOURCE)?;
    let repo = MenuItemRepository::new(state.db.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::new(ErrorCode::MenuItemNotFound));
    }
    Ok(ApiResponse::message("Menu item deleted successfully"))
}
