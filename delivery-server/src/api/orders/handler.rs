//! Order API Handlers

use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{OrderRepository, RestaurantRepository};
use crate::utils::validation::validate_id;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderCreate, OrderResponse, OrderStatus, OrderStatusUpdate};

const RESOURCE: &str = "order";

/// Shown when the referenced restaurant has since been deleted
const UNKNOWN_RESTAURANT: &str = "Unknown Restaurant";

/// Attach restaurant names, looking each restaurant up once
async fn with_restaurant_names(
    restaurants: &RestaurantRepository,
    orders: Vec<Order>,
) -> AppResult<Vec<OrderResponse>> {
    let mut names: HashMap<String, String> = HashMap::new();
    let mut responses = Vec::with_capacity(orders.len());

    for order in orders {
        let restaurant_name = match names.get(&order.restaurant_id) {
            Some(name) => name.clone(),
            None => {
                let name = restaurants
                    .name_of(&order.restaurant_id)
                    .await?
                    .unwrap_or_else(|| UNKNOWN_RESTAURANT.to_string());
                names.insert(order.restaurant_id.clone(), name.clone());
                name
            }
        };
        responses.push(OrderResponse {
            order,
            restaurant_name,
        });
    }

    Ok(responses)
}

/// POST /api/orders - 下单
///
/// 餐厅必须存在；明细按客户端提交原样保存，金额不重新计算
pub async fn create(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    validate_id(&payload.restaurant_id, "restaurant")?;
    for item in &payload.items {
        validate_id(&item.menu_item_id, "menu item")?;
    }

    let restaurants = RestaurantRepository::new(state.db.clone());
    let restaurant_name = restaurants
        .name_of(&payload.restaurant_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::RestaurantNotFound))?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(&current.id, payload).await?;

    tracing::info!(
        order_id = %order.id,
        user_id = %current.id,
        restaurant_id = %order.restaurant_id,
        total = order.total,
        "Order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            order,
            restaurant_name,
        }),
    ))
}

/// GET /api/orders - 当前用户订单 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<Vec<OrderResponse>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_by_user(&current.id).await?;

    let restaurants = RestaurantRepository::new(state.db.clone());
    Ok(Json(with_restaurant_names(&restaurants, orders).await?))
}

/// GET /api/orders/{id} - 订单详情
///
/// 他人的订单与不存在的订单一样返回 404
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderResponse>> {
    validate_id(&id, RESOURCE)?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_for_user(&id, &current.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;

    let restaurants = RestaurantRepository::new(state.db.clone());
    let mut responses = with_restaurant_names(&restaurants, vec![order]).await?;
    responses
        .pop()
        .map(Json)
        .ok_or_else(|| AppError::internal("Order projection lost"))
}

/// PUT /api/orders/{id}/status - 更新订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<ApiResponse<()>> {
    validate_id(&id, RESOURCE)?;
    let status: OrderStatus = payload
        .status
        .parse()
        .map_err(|_| AppError::new(ErrorCode::InvalidOrderStatus))?;

    let repo = OrderRepository::new(state.db.clone());
    if !repo.update_status(&id, status).await? {
        return Err(AppError::new(ErrorCode::OrderNotFound));
    }

    tracing::info!(order_id = %id, status = %status, by = %current.id, "Order status updated");
    Ok(ApiResponse::message(format!("Order status updated to {}", status)))
}
