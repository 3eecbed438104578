//! 认证中间件
//!
//! 为 JWT 认证提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::security_log;
use crate::utils::{AppError, ErrorCode};

/// 判断请求是否需要认证
///
/// 受保护: `/api/users/*` (注册、登录除外) 与 `/api/orders*`
pub fn requires_auth(method: &Method, path: &str) -> bool {
    if method == Method::OPTIONS {
        return false;
    }
    if path == "/api/users/register" || path == "/api/users/login" {
        return false;
    }
    path.starts_with("/api/users/") || path == "/api/orders" || path.starts_with("/api/orders/")
}

/// 认证中间件 - 要求用户登录
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT，
/// 再确认令牌主体对应的用户仍然存在。
/// 成功后将 [`CurrentUser`] 注入请求扩展。
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 NotAuthenticated |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 TokenInvalid |
/// | 用户不存在 | 401 UserNotFound |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !requires_auth(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    let claims = match state.get_jwt_service().validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            return match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::new(ErrorCode::TokenInvalid)),
            };
        }
    };

    // 令牌有效但用户可能已不存在
    let repo = UserRepository::new(state.get_db());
    let exists = repo.find_by_id(&claims.sub).await?.is_some();
    if !exists {
        security_log!("WARN", "auth_user_missing", user_id = claims.sub.clone());
        return Err(AppError::new(ErrorCode::UserNotFound));
    }

    req.extensions_mut().insert(CurrentUser::from(claims));
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_routes_skip_auth() {
        assert!(!requires_auth(&Method::POST, "/api/users/register"));
        assert!(!requires_auth(&Method::POST, "/api/users/login"));
        assert!(!requires_auth(&Method::GET, "/api/restaurants"));
        assert!(!requires_auth(&Method::GET, "/api/restaurants/abc/menu"));
        assert!(!requires_auth(&Method::GET, "/api/categories"));
        assert!(!requires_auth(&Method::GET, "/health"));
        assert!(!requires_auth(&Method::GET, "/api/"));
    }

    #[test]
    fn user_and_order_routes_need_auth() {
        assert!(requires_auth(&Method::GET, "/api/users/profile"));
        assert!(requires_auth(&Method::PUT, "/api/users/addresses/0"));
        assert!(requires_auth(&Method::GET, "/api/orders"));
        assert!(requires_auth(&Method::PUT, "/api/orders/abc/status"));
    }

    #[test]
    fn preflight_skips_auth() {
        assert!(!requires_auth(&Method::OPTIONS, "/api/orders"));
    }

    #[test]
    fn similar_prefix_is_not_protected() {
        assert!(!requires_auth(&Method::GET, "/api/ordersx"));
    }
}
