//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, CurrentUserResponse},
};

/// Register a new user and return an access token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        &payload.email,
        &payload.password,
        &payload.display_name,
    )
    .await?;

    let (access_token, expires_in) = AuthService::generate_access_token(&user, state.config())?;

    let response = AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: user.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, access_token, expires_in) =
        AuthService::login(state.db(), state.config(), &payload.email, &payload.password).await?;

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: user.into(),
    }))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = AuthService::get_user_by_id(state.db(), &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(CurrentUserResponse { user: user.into() }))
}
