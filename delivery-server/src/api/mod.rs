//! API 路由模块
//!
//! # 结构
//!
//! - [`root`] - API 根 (存活探测)
//! - [`health`] - 健康检查
//! - [`restaurants`] - 餐厅接口 (含菜单)
//! - [`categories`] - 分类接口
//! - [`menu_items`] - 菜品接口
//! - [`users`] - 注册、登录、资料、地址
//! - [`orders`] - 订单接口

pub mod health;
pub mod root;

// Catalog
pub mod categories;
pub mod menu_items;
pub mod restaurants;

// Accounts & orders
pub mod orders;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};
