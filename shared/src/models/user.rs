//! User Model (wire types)
//!
//! The stored document, including the password hash, lives in the server's
//! repository layer; only these projections cross the API boundary.

use serde::{Deserialize, Serialize};

/// Saved delivery address of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAddress {
    /// User label, e.g. "Home" or "Work"
    pub label: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLogin {
    pub email: String,
    pub password: String,
}

/// Profile update payload (only present fields are merged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// User projection returned by the profile endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub addresses: Vec<UserAddress>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Access token issued by register/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl Token {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
