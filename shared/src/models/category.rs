//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity, a flat tag used to filter restaurants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon name or emoji rendered by the storefront
    pub icon: String,
    /// CSS color, e.g. `#FF6B35`
    pub color: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub icon: String,
    pub color: String,
}
