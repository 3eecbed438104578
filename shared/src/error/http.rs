//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::OrderNotFound
            | Self::RestaurantNotFound
            | Self::MenuItemNotFound
            | Self::CategoryNotFound
            | Self::AddressNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::ConcurrentModification => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::UserNotFound => StatusCode::UNAUTHORIZED,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation, malformed ids, duplicate email)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidId
            | Self::RequiredField
            | Self::InvalidOrderStatus
            | Self::EmailAlreadyRegistered => StatusCode::BAD_REQUEST,
        }
    }
}
