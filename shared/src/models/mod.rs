//! Data Models
//!
//! Wire types shared by the server and its clients. Field names are camelCase
//! on the wire and in the document store.

// Catalog
pub mod category;
pub mod menu_item;
pub mod restaurant;

// Accounts
pub mod user;

// Orders
pub mod order;

// Re-exports
pub use category::{Category, CategoryCreate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{
    Order, OrderCreate, OrderItem, OrderResponse, OrderStatus, OrderStatusUpdate,
    UnknownOrderStatus,
};
pub use restaurant::{
    Address, Contact, Hours, Restaurant, RestaurantCreate, RestaurantQuery, RestaurantUpdate,
};
pub use user::{Token, UserAddress, UserCreate, UserLogin, UserResponse, UserUpdate};
