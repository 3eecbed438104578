//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity, owned by exactly one restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    /// Key of the owning restaurant
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    /// Menu section, e.g. "Burgers" (free text, not a [`super::Category`])
    pub category: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// Update menu item payload (all optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}
