//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Postal address (restaurant location, order delivery address)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

/// Restaurant contact channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

/// Opening hours, e.g. `{"open": "11:00", "close": "23:00"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hours {
    pub open: String,
    pub close: String,
}

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub cuisine: String,
    #[serde(default)]
    pub rating: f64,
    /// Free-form estimate shown to customers, e.g. "30-40 min"
    pub delivery_time: String,
    pub delivery_fee: f64,
    #[serde(default = "default_true")]
    pub is_open: bool,
    /// Promotion label; restaurants with a promo match the promo filter
    #[serde(default)]
    pub promo: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub address: Address,
    pub contact: Contact,
    pub hours: Hours,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreate {
    pub name: String,
    pub description: String,
    pub image: String,
    pub cuisine: String,
    #[serde(default)]
    pub rating: f64,
    pub delivery_time: String,
    pub delivery_fee: f64,
    #[serde(default = "default_true")]
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<String>,
    pub categories: Vec<String>,
    pub address: Address,
    pub contact: Contact,
    pub hours: Hours,
}

/// Update restaurant payload (only present fields are merged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Hours>,
}

/// Query string of `GET /api/restaurants`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantQuery {
    /// Category tag, `all`, or the promotions pseudo-category
    pub category: Option<String>,
    /// Free-text search over name, description and cuisine
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_applies_defaults() {
        let json = serde_json::json!({
            "name": "Cantina",
            "description": "Tacos",
            "image": "https://img/cantina.jpg",
            "cuisine": "Mexican",
            "deliveryTime": "30-40 min",
            "deliveryFee": 4.5,
            "categories": ["Mexican"],
            "address": {"street": "Rua A", "city": "Lisboa", "postalCode": "1000-001"},
            "contact": {"phone": "123", "email": "c@cantina.pt"},
            "hours": {"open": "11:00", "close": "23:00"}
        });
        let create: RestaurantCreate = serde_json::from_value(json).unwrap();
        assert_eq!(create.rating, 0.0);
        assert!(create.is_open);
        assert!(create.promo.is_none());
        assert_eq!(create.address.postal_code, "1000-001");
    }

    #[test]
    fn update_payload_serializes_only_present_fields() {
        let update = RestaurantUpdate {
            is_open: Some(false),
            delivery_fee: Some(2.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"isOpen": false, "deliveryFee": 2.0}));
    }
}
