//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Reject unless the caller carries the admin role
pub fn require_admin(auth_user: &AuthenticatedUser) -> Result<(), AppError> {
    if auth_user.role != crate::constants::roles::ADMIN {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let token = bearer_token(&request).ok_or_else(|| {
        debug!(path = %path, "Auth failed: missing or malformed Authorization header");
        AppError::Unauthorized
    })?;

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: token verification failed");
        e
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        debug!(path = %path, sub = %claims.sub, "Auth failed: invalid user ID in token");
        AppError::InvalidToken
    })?;

    let user = AuthenticatedUser {
        id: user_id,
        email: claims.email,
        role: claims.role,
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Optional authentication middleware (doesn't fail if no token)
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(&request) {
        if let Ok(claims) = AuthService::verify_token(token, &state.config().jwt.secret) {
            if let Ok(user_id) = Uuid::parse_str(&claims.sub) {
                request.extensions_mut().insert(AuthenticatedUser {
                    id: user_id,
                    email: claims.email,
                    role: claims.role,
                });
            }
        }
    }

    next.run(request).await
}
