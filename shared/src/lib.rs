//! Shared types for the delivery marketplace
//!
//! Wire models, the unified error system and small utilities used by the
//! server and by any Rust client of the API.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
