//! Handlers for the `/auth` resource (admin accounts).

use atelier_core::error::CoreError;
use atelier_core::validation::validate_password_strength;
use atelier_db::models::user::{ChangePassword, LoginUser, RegisterUser, UserResponse};
use atelier_db::repositories::UserRepo;
use axum::extract::State;
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterUser>,
) -> AppResult<Success> {
    input.validate()?;
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("password hashing failed: {e}")))?;

    let user = UserRepo::create(&state.pool, &input.name, &input.email, &password_hash)
        .await
        .map_err(|err| {
            if is_unique_violation(&err, "uq_users_email") {
                AppError::Core(CoreError::Conflict("Email already registered!".into()))
            } else {
                err.into()
            }
        })?;

    tracing::info!(id = user.id, "account registered");
    Ok(Success::created()
        .message("Account created successfully")
        .field("user", &UserResponse::from(user)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginUser>,
) -> AppResult<Success> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("password verification failed: {e}")))?;
    if !valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("token generation failed: {e}")))?;

    tracing::info!(id = user.id, "account logged in");
    Ok(Success::ok()
        .message("Logged in successfully")
        .field("token", &token)
        .field("user", &UserResponse::from(user)))
}

/// POST /api/auth/logout
///
/// Tokens are stateless; logout exists so clients have a symmetric call
/// when discarding their stored token.
pub async fn logout() -> AppResult<Success> {
    Ok(Success::ok().message("Logged out successfully"))
}

/// GET /api/auth/profile
pub async fn profile(user: AuthUser, State(state): State<AppState>) -> AppResult<Success> {
    let account = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Account not found".into()))?;
    Ok(Success::ok().field("user", &UserResponse::from(account)))
}

/// PUT /api/auth/change-password
pub async fn change_password(
    user: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<ChangePassword>,
) -> AppResult<Success> {
    let account = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Account not found".into()))?;

    let valid = verify_password(&input.current_password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("password verification failed: {e}")))?;
    if !valid {
        return Err(AppError::BadRequest("Current password is incorrect".into()));
    }

    validate_password_strength(&input.new_password).map_err(AppError::BadRequest)?;
    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("password hashing failed: {e}")))?;

    UserRepo::update_password(&state.pool, account.id, &password_hash).await?;
    tracing::info!(id = account.id, "password changed");
    Ok(Success::ok().message("Password changed successfully"))
}
