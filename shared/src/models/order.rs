//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Address;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in lifecycle order
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status string is not part of the lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrderStatus(pub String);

impl fmt::Display for UnknownOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status: {}", self.0)
    }
}

impl std::error::Error for UnknownOrderStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    /// Exact, case-sensitive match on the wire names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownOrderStatus(s.to_string()))
    }
}

/// Line item snapshot, copied from the client at order time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub items: Vec<OrderItem>,
    pub delivery_address: Address,
    pub payment_method: String,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub service_fee: f64,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create order payload
///
/// Totals are computed by the client and stored as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub restaurant_id: String,
    pub items: Vec<OrderItem>,
    pub delivery_address: Address,
    pub payment_method: String,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub service_fee: f64,
    pub total: f64,
}

/// Status update payload; the raw string is checked against [`OrderStatus`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

/// Order projection with the restaurant name denormalized in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: Order,
    pub restaurant_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_lifecycle_status() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert!("Pending".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out_for_delivery\"");
    }

    #[test]
    fn response_flattens_order_fields() {
        let order = Order {
            id: "a".repeat(32),
            user_id: "b".repeat(32),
            restaurant_id: "c".repeat(32),
            items: vec![OrderItem {
                menu_item_id: "d".repeat(32),
                name: "Burger".into(),
                price: 9.5,
                quantity: 2,
            }],
            delivery_address: Address {
                street: "Rua B".into(),
                city: "Porto".into(),
                postal_code: "4000-001".into(),
            },
            payment_method: "card".into(),
            subtotal: 19.0,
            delivery_fee: 2.0,
            service_fee: 1.0,
            total: 22.0,
            status: OrderStatus::Pending,
            created_at: 1,
            updated_at: 1,
        };
        let json = serde_json::to_value(OrderResponse {
            order,
            restaurant_name: "Burger Bar".into(),
        })
        .unwrap();
        assert_eq!(json["restaurantName"], "Burger Bar");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["items"][0]["menuItemId"], "d".repeat(32));
        assert_eq!(json["deliveryAddress"]["postalCode"], "4000-001");
    }
}
