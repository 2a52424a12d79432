//! WebRTC signaling relay
//!
//! Relays offer/answer/ICE payloads between the members of one team room
//! and announces peers joining and leaving. The server never inspects the
//! SDP or candidate payloads.

use axum::{
    extract::{
        Query, State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

use super::{authenticate, team_room};

use super::chat::WsAuthQuery;

/// Signal types a client may relay
const RELAYED_TYPES: &[&str] = &["offer", "answer", "ice-candidate"];

/// Inbound signaling frame from a client
#[derive(Debug, Deserialize)]
struct SignalFrame {
    r#type: String,
    payload: serde_json::Value,
}

/// Outbound signaling event; `from` lets peers drop their own echoes
#[derive(Debug, Serialize, Deserialize)]
struct SignalEvent {
    r#type: String,
    from: Uuid,
    display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
}

/// WebRTC signaling WebSocket endpoint; requires team membership
pub async fn ws_webrtc(
    State(state): State<AppState>,
    Query(query): Query<WsAuthQuery>,
    ws: WebSocketUpgrade,
) -> AppResult<Response> {
    let user = authenticate(&state, &query.token).await?;

    let team_id = user
        .team_id
        .ok_or_else(|| AppError::Forbidden("Signaling requires a team".to_string()))?;

    Ok(ws.on_upgrade(move |socket| handle_webrtc(socket, state, user, team_id)))
}

async fn handle_webrtc(socket: WebSocket, state: AppState, user: User, team_id: Uuid) {
    let room = team_room("webrtc-team", &team_id);

    let (mut sender, mut receiver) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<String>(32);

    // Forwarder drops this peer's own frames so it never sees its echoes
    let mut rx = state.rooms().subscribe(&room).await;
    let self_id = user.id;
    tokio::spawn(async move {
        while let Ok(msg) = rx.recv().await {
            let own = serde_json::from_str::<SignalEvent>(&msg)
                .map(|e| e.from == self_id)
                .unwrap_or(false);
            if own {
                continue;
            }
            if out_tx.send(msg).await.is_err() {
                break;
            }
        }
    });

    let send_task = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    publish_event(&state, &room, &user, "peer-joined", None).await;
    tracing::debug!(user_id = %user.id, room = %room, "Signaling peer joined");

    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Text(text) => {
                let Ok(frame) = serde_json::from_str::<SignalFrame>(&text) else {
                    continue;
                };
                if !RELAYED_TYPES.contains(&frame.r#type.as_str()) {
                    continue;
                }

                publish_event(&state, &room, &user, &frame.r#type, Some(frame.payload)).await;
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    publish_event(&state, &room, &user, "peer-left", None).await;
    send_task.abort();
    state.rooms().prune().await;

    tracing::debug!(user_id = %user.id, room = %room, "Signaling peer left");
}

async fn publish_event(
    state: &AppState,
    room: &str,
    user: &User,
    kind: &str,
    payload: Option<serde_json::Value>,
) {
    let event = SignalEvent {
        r#type: kind.to_string(),
        from: user.id,
        display_name: user.display_name.clone(),
        payload,
    };

    if let Ok(msg) = serde_json::to_string(&event) {
        state.rooms().publish(room, msg).await;
    }
}
