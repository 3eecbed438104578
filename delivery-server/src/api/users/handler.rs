//! User API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::{CurrentUser, hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::user::{NewUser, UserRecord};
use crate::db::repository::{RepoError, UserRepository};
use crate::security_log;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
    validate_required_text, validate_text_len,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Token, UserAddress, UserCreate, UserLogin, UserResponse, UserUpdate};

fn issue_token(state: &ServerState, user: &UserRecord) -> AppResult<Json<Token>> {
    let token = state
        .get_jwt_service()
        .generate_token(&user.id, &user.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;
    Ok(Json(Token::bearer(token)))
}

/// 加载当前用户 (中间件已确认存在，这里处理期间被删除的情况)
async fn load_current(repo: &UserRepository, current: &CurrentUser) -> AppResult<UserRecord> {
    repo.find_by_id(&current.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))
}

/// POST /api/users/register - 注册并返回访问令牌
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<Token>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;
    validate_text_len(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let password_hash = hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .create(NewUser {
            name: payload.name,
            email: payload.email,
            password_hash,
            phone: payload.phone,
        })
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::new(ErrorCode::EmailAlreadyRegistered),
            other => other.into(),
        })?;

    tracing::info!(user_id = %user.id, "User registered");
    issue_token(&state, &user)
}

/// POST /api/users/login - 登录
///
/// 邮箱不存在与密码错误返回同一错误
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<UserLogin>,
) -> AppResult<Json<Token>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_email(&payload.email).await?;

    match user {
        Some(user) if verify_password(&payload.password, &user.password_hash) => {
            security_log!("INFO", "login_success", user_id = user.id.clone());
            issue_token(&state, &user)
        }
        _ => {
            security_log!("WARN", "login_failed", email = payload.email.clone());
            Err(AppError::invalid_credentials())
        }
    }
}

/// GET /api/users/profile - 当前用户资料
pub async fn get_profile(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let user = load_current(&repo, &current).await?;
    Ok(Json(user.into()))
}

/// PUT /api/users/profile - 部分更新资料 (name, phone)
pub async fn update_profile(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<UserResponse>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .update_profile(&current.id, payload)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;
    Ok(Json(user.into()))
}

/// POST /api/users/addresses - 新增地址
///
/// 清除旧默认地址与追加在同一条语句中完成，并发新增互不覆盖
pub async fn add_address(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Json(address): Json<UserAddress>,
) -> AppResult<ApiResponse<()>> {
    validate_address(&address)?;

    let repo = UserRepository::new(state.db.clone());
    if !repo.push_address(&current.id, address).await? {
        return Err(AppError::new(ErrorCode::UserNotFound));
    }

    Ok(ApiResponse::message("Address added successfully"))
}

/// PUT /api/users/addresses/{index} - 替换地址
pub async fn update_address(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
    Path(index): Path<usize>,
    Json(address): Json<UserAddress>,
) -> AppResult<ApiResponse<()>> {
    validate_address(&address)?;

    let repo = UserRepository::new(state.db.clone());
    if !repo.replace_address(&current.id, index, address).await? {
        load_current(&repo, &current).await?;
        return Err(AppError::new(ErrorCode::AddressNotFound));
    }

    Ok(ApiResponse::message("Address updated successfully"))
}

fn validate_address(address: &UserAddress) -> AppResult<()> {
    validate_text_len(&address.label, "label", MAX_SHORT_TEXT_LEN)?;
    validate_text_len(&address.street, "street", MAX_NAME_LEN)?;
    validate_text_len(&address.city, "city", MAX_SHORT_TEXT_LEN)?;
    validate_text_len(&address.postal_code, "postalCode", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}
