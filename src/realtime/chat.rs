//! Chat relay
//!
//! Fan-out of chat messages over the global room and the sender's team
//! room. No history is kept; a client only sees messages sent while it is
//! connected.

use axum::{
    extract::{
        Query, State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use chrono::Utc;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{constants::GLOBAL_CHAT_ROOM, error::AppResult, models::User, state::AppState};

use super::{authenticate, team_room};

/// Token carried in the WebSocket handshake query string
#[derive(Debug, Deserialize)]
pub struct WsAuthQuery {
    pub token: String,
}

/// Inbound chat frame from a client
#[derive(Debug, Deserialize)]
struct ChatFrame {
    /// "global" or "team"
    room: String,
    message: String,
}

/// Outbound chat event
#[derive(Debug, Serialize)]
struct ChatEvent<'a> {
    r#type: &'static str,
    room: &'a str,
    sender_id: Uuid,
    sender_name: &'a str,
    message: &'a str,
    sent_at: String,
}

/// Chat WebSocket endpoint
pub async fn ws_chat(
    State(state): State<AppState>,
    Query(query): Query<WsAuthQuery>,
    ws: WebSocketUpgrade,
) -> AppResult<Response> {
    let user = authenticate(&state, &query.token).await?;
    Ok(ws.on_upgrade(move |socket| handle_chat(socket, state, user)))
}

async fn handle_chat(socket: WebSocket, state: AppState, user: User) {
    let team_room_name = user.team_id.map(|id| team_room("chat-team", &id));

    let mut rooms = vec![GLOBAL_CHAT_ROOM.to_string()];
    if let Some(room) = &team_room_name {
        rooms.push(room.clone());
    }

    let (mut sender, mut receiver) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<String>(32);

    // One forwarder per subscribed room; they exit once out_rx is gone
    for room in &rooms {
        let mut rx = state.rooms().subscribe(room).await;
        let tx = out_tx.clone();
        tokio::spawn(async move {
            while let Ok(msg) = rx.recv().await {
                if tx.send(msg).await.is_err() {
                    break;
                }
            }
        });
    }
    drop(out_tx);

    let send_task = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    tracing::debug!(user_id = %user.id, "Chat client connected");

    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Text(text) => {
                let Ok(frame) = serde_json::from_str::<ChatFrame>(&text) else {
                    continue;
                };

                let target = match frame.room.as_str() {
                    "global" => Some(GLOBAL_CHAT_ROOM),
                    "team" => team_room_name.as_deref(),
                    _ => None,
                };
                let Some(target) = target else { continue };

                let event = ChatEvent {
                    r#type: "chat",
                    room: &frame.room,
                    sender_id: user.id,
                    sender_name: &user.display_name,
                    message: &frame.message,
                    sent_at: Utc::now().to_rfc3339(),
                };

                if let Ok(payload) = serde_json::to_string(&event) {
                    state.rooms().publish(target, payload).await;
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    send_task.abort();
    state.rooms().prune().await;

    tracing::debug!(user_id = %user.id, "Chat client disconnected");
}
