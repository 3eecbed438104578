//! JWT 令牌服务
//!
//! 处理 JWT 令牌的生成、验证和解析。

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 默认令牌有效期 (分钟)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 30;

/// 密钥最小长度
pub const MIN_SECRET_LEN: usize = 32;

/// JWT 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// JWT 密钥 (至少 32 字节)
    pub secret: String,
    /// 令牌过期时间 (分钟)
    pub expiration_minutes: i64,
    /// 令牌签发者
    pub issuer: String,
    /// 令牌受众
    pub audience: String,
}

impl JwtConfig {
    /// 从环境变量加载
    ///
    /// | 环境变量 | 默认值 |
    /// |----------|--------|
    /// | JWT_SECRET | (debug 构建自动生成, release 构建必填) |
    /// | JWT_EXPIRATION_MINUTES | 30 |
    /// | JWT_ISSUER | delivery-server |
    /// | JWT_AUDIENCE | delivery-clients |
    pub fn from_env() -> Result<Self, JwtError> {
        let secret = load_jwt_secret()?;
        Ok(Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_EXPIRATION_MINUTES),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "delivery-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "delivery-clients".to_string()),
        })
    }

    /// 使用指定密钥和默认参数 (测试、嵌入场景)
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            issuer: "delivery-server".to_string(),
            audience: "delivery-clients".to_string(),
        }
    }
}

/// 存储在令牌中的 JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 用户 ID (Subject)
    pub sub: String,
    /// 用户邮箱
    pub email: String,
    /// 令牌类型
    pub token_type: String,
    /// 过期时间戳
    pub exp: i64,
    /// 签发时间戳
    pub iat: i64,
    /// 签发者
    pub iss: String,
    /// 受众
    pub aud: String,
}

/// JWT 错误
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("无效令牌: {0}")]
    InvalidToken(String),

    #[error("令牌已过期")]
    ExpiredToken,

    #[error("无效签名")]
    InvalidSignature,

    #[error("令牌生成失败: {0}")]
    GenerationFailed(String),

    #[error("配置错误: {0}")]
    ConfigError(String),
}

/// 生成可打印的安全 JWT 密钥 (用于开发环境)
pub fn generate_secure_printable_jwt_secret() -> Result<String, JwtError> {
    const ALLOWED: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:,.<>?";

    let rng = SystemRandom::new();
    let mut bytes = [0u8; 64];
    rng.fill(&mut bytes)
        .map_err(|_| JwtError::ConfigError("Failed to generate secure random key".to_string()))?;

    Ok(bytes
        .iter()
        .map(|b| ALLOWED[*b as usize % ALLOWED.len()] as char)
        .collect())
}

/// 从环境变量安全地加载 JWT 密钥
fn load_jwt_secret() -> Result<String, JwtError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) => {
            if secret.len() < MIN_SECRET_LEN {
                return Err(JwtError::ConfigError(format!(
                    "JWT_SECRET must be at least {} characters long",
                    MIN_SECRET_LEN
                )));
            }
            Ok(secret)
        }
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!(
                    "JWT_SECRET not set! Generating temporary key for development, tokens will not survive a restart."
                );
                generate_secure_printable_jwt_secret()
            }
            #[cfg(not(debug_assertions))]
            {
                Err(JwtError::ConfigError(
                    "JWT_SECRET environment variable must be set in production!".to_string(),
                ))
            }
        }
    }
}

/// JWT 令牌服务
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .field("expiration_minutes", &self.config.expiration_minutes)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    /// 使用指定配置创建新的 JWT 服务
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 为用户生成新令牌 (使用配置的有效期)
    pub fn generate_token(&self, user_id: &str, email: &str) -> Result<String, JwtError> {
        self.issue_token(
            user_id,
            email,
            Duration::minutes(self.config.expiration_minutes),
        )
    }

    /// 以指定有效期签发令牌
    pub fn issue_token(&self, user_id: &str, email: &str, ttl: Duration) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + ttl;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            token_type: "access".to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// 验证并解码令牌
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// 令牌主体 (用户 ID)；签名或过期校验失败时返回 `None`
    pub fn subject(&self, token: &str) -> Option<String> {
        self.validate_token(token).ok().map(|claims| claims.sub)
    }

    /// 从 Authorization 头提取令牌
    ///
    /// 方案名不区分大小写 (`Bearer` / `bearer`)，与登录返回的 `token_type` 一致
    pub fn extract_from_header(header: &str) -> Option<&str> {
        let (scheme, token) = header.trim_start().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        Some(token.trim()).filter(|t| !t.is_empty())
    }
}

/// 当前用户上下文
///
/// 由认证中间件在令牌校验并确认用户存在后创建，注入到请求扩展
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 用户 ID
    pub id: String,
    /// 用户邮箱
    pub email: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::with_config(JwtConfig::with_secret(
            "test-secret-key-with-at-least-32-characters",
        ))
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = service();
        let token = service
            .generate_token("user123", "ana@example.com")
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.exp - claims.iat, DEFAULT_EXPIRATION_MINUTES * 60);
        assert_eq!(service.subject(&token).as_deref(), Some("user123"));
    }

    #[test]
    fn test_expired_token() {
        let service = service();
        // 超过默认 60 秒 leeway
        let token = service
            .issue_token("user123", "ana@example.com", Duration::minutes(-5))
            .unwrap();

        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::ExpiredToken)
        ));
        assert_eq!(service.subject(&token), None);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().generate_token("user123", "a@b.com").unwrap();
        let other = JwtService::with_config(JwtConfig::with_secret(
            "another-secret-key-with-at-least-32-chars",
        ));
        assert!(matches!(
            other.validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let token = service().generate_token("user123", "a@b.com").unwrap();
        let mut config = JwtConfig::with_secret("test-secret-key-with-at-least-32-characters");
        config.audience = "someone-else".to_string();
        assert!(JwtService::with_config(config).validate_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_sentinel() {
        assert_eq!(service().subject("not-a-jwt"), None);
        assert_eq!(service().subject(""), None);
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Bearer "), None);
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header("abc"), None);
        assert_eq!(JwtService::extract_from_header("bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("BEARER  abc "), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Bearerabc"), None);
    }

    #[test]
    fn test_printable_secret() {
        let secret = generate_secure_printable_jwt_secret().unwrap();
        assert_eq!(secret.len(), 64);
        assert!(secret.chars().all(|c| c.is_ascii_graphic()));
    }
}
