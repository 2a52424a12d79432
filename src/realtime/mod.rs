//! Realtime relay
//!
//! Stateless WebSocket fan-out for chat and WebRTC signaling. Messages are
//! relayed over in-process broadcast channels scoped to named rooms; nothing
//! is persisted and delivery is best-effort.

pub mod chat;
pub mod hub;
pub mod webrtc;

pub use hub::RoomHub;

use axum::{Router, routing::get};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::User,
    services::AuthService,
    state::AppState,
};

/// WebSocket routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ws/chat", get(chat::ws_chat))
        .route("/ws/webrtc", get(webrtc::ws_webrtc))
}

/// Authenticate a WebSocket connection from its query-string token.
///
/// Browsers cannot set an Authorization header on a WebSocket handshake, so
/// the token rides in the query string instead.
pub(crate) async fn authenticate(state: &AppState, token: &str) -> AppResult<User> {
    let claims = AuthService::verify_token(token, &state.config().jwt.secret)?;
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    AuthService::get_user_by_id(state.db(), &user_id)
        .await?
        .ok_or(AppError::Unauthorized)
}

/// Broadcast room name for a team
pub(crate) fn team_room(prefix: &str, team_id: &Uuid) -> String {
    format!("{prefix}-{team_id}")
}
