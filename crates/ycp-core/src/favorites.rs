//! Session-local favorite toggles.
//!
//! Favorite events travel over an explicit broadcast channel instead of a
//! shared view-model reached up the navigation tree: whichever surface
//! mutates favorites publishes on the bus, and the history feed subscribes
//! for its own lifetime. Events live in memory only — a process restart
//! drops them, while redemptions are refetched from the backend.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Direction of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Added,
    Removed,
}

/// One observed favorite toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteEvent {
    pub kind: FavoriteKind,
    pub title: String,

    #[serde(default)]
    pub business_name: Option<String>,

    /// RFC 3339 timestamp of the toggle.
    pub occurred_at: String,
}

/// Broadcast channel for favorite toggles.
///
/// Cloning the bus shares the same underlying channel; subscriptions made
/// after an event was published do not see it.
#[derive(Debug, Clone)]
pub struct FavoritesBus {
    tx: broadcast::Sender<FavoriteEvent>,
}

impl FavoritesBus {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes one toggle to every live subscriber.
    ///
    /// Returns the number of subscribers that received the event. An event
    /// published with no subscribers is dropped, matching the session-only
    /// semantics of the feed.
    pub fn publish(&self, event: FavoriteEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<FavoriteEvent> {
        self.tx.subscribe()
    }
}

impl Default for FavoritesBus {
    fn default() -> Self {
        Self::new(64)
    }
}
