//! Broadcast room registry

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use crate::constants::ROOM_CHANNEL_CAPACITY;

/// Registry of named broadcast rooms.
///
/// Rooms are created on first subscription and dropped once the last
/// receiver disconnects. Senders never block; slow receivers lag and skip.
#[derive(Clone, Default)]
pub struct RoomHub {
    rooms: Arc<RwLock<HashMap<String, broadcast::Sender<String>>>>,
}

impl RoomHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a room, creating it if absent
    pub async fn subscribe(&self, room: &str) -> broadcast::Receiver<String> {
        let mut rooms = self.rooms.write().await;
        rooms
            .entry(room.to_string())
            .or_insert_with(|| broadcast::channel(ROOM_CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Publish a message to a room; returns the number of receivers reached
    pub async fn publish(&self, room: &str, message: String) -> usize {
        let rooms = self.rooms.read().await;
        match rooms.get(room) {
            Some(tx) => tx.send(message).unwrap_or(0),
            None => 0,
        }
    }

    /// Drop rooms that no longer have any receivers
    pub async fn prune(&self) {
        let mut rooms = self.rooms.write().await;
        rooms.retain(|_, tx| tx.receiver_count() > 0);
    }

    /// Current number of live rooms
    pub async fn room_count(&self) -> usize {
        self.rooms.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribe_creates_room_and_publish_reaches_it() {
        let hub = RoomHub::new();
        let mut rx = hub.subscribe("global-chat").await;

        let reached = hub.publish("global-chat", "hello".to_string()).await;
        assert_eq!(reached, 1);
        assert_eq!(rx.recv().await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_publish_to_unknown_room_reaches_nobody() {
        let hub = RoomHub::new();
        assert_eq!(hub.publish("nowhere", "lost".to_string()).await, 0);
    }

    #[tokio::test]
    async fn test_rooms_are_isolated() {
        let hub = RoomHub::new();
        let mut a = hub.subscribe("team-a").await;
        let mut b = hub.subscribe("team-b").await;

        hub.publish("team-a", "for a".to_string()).await;
        assert_eq!(a.recv().await.unwrap(), "for a");
        assert!(b.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_prune_drops_empty_rooms() {
        let hub = RoomHub::new();
        {
            let _rx = hub.subscribe("ephemeral").await;
            assert_eq!(hub.room_count().await, 1);
        }
        hub.prune().await;
        assert_eq!(hub.room_count().await, 0);
    }
}
