//! Activity-feed merge: redeemed coupons plus favorite toggles, newest first.
//!
//! The two origins are independent — redemptions come from the backend,
//! favorite events from the session-local bus — and the feed is a full
//! recompute over both lists on every read. List sizes are tens of items,
//! so incremental maintenance is not worth its complexity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::favorites::{FavoriteEvent, FavoriteKind};
use crate::models::Redemption;

/// Origin tag for a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    CouponUsed,
    FavoriteAdded,
    FavoriteRemoved,
}

impl std::fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryKind::CouponUsed => write!(f, "coupon used"),
            HistoryKind::FavoriteAdded => write!(f, "favorite added"),
            HistoryKind::FavoriteRemoved => write!(f, "favorite removed"),
        }
    }
}

/// One row of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub kind: HistoryKind,
    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    /// Raw RFC 3339 timestamp as received; kept as text for display.
    #[serde(default)]
    pub occurred_at: Option<String>,
}

/// Sort key for a feed entry. Missing or unparsable timestamps collapse to
/// the earliest representable instant, so they always land after every valid
/// entry in the descending feed.
fn sort_key(occurred_at: Option<&str>) -> DateTime<Utc> {
    occurred_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map_or(DateTime::<Utc>::MIN_UTC, |dt| dt.with_timezone(&Utc))
}

fn redemption_entry(redemption: &Redemption) -> HistoryEntry {
    let (title, subtitle) = match &redemption.promotion {
        Some(p) => (p.title.clone(), p.business_name.clone()),
        None => ("Unknown promotion".to_string(), None),
    };
    HistoryEntry {
        kind: HistoryKind::CouponUsed,
        title,
        subtitle,
        occurred_at: redemption.used_at.clone(),
    }
}

fn favorite_entry(event: &FavoriteEvent) -> HistoryEntry {
    let kind = match event.kind {
        FavoriteKind::Added => HistoryKind::FavoriteAdded,
        FavoriteKind::Removed => HistoryKind::FavoriteRemoved,
    };
    HistoryEntry {
        kind,
        title: event.title.clone(),
        subtitle: event.business_name.clone(),
        occurred_at: Some(event.occurred_at.clone()),
    }
}

/// Merges both origins into one reverse-chronological feed.
///
/// The sort is stable, so entries with equal (or equally unparsable)
/// timestamps keep their concatenation order — redemptions first, then
/// favorites — and repeated calls over the same inputs produce the same
/// sequence.
#[must_use]
pub fn merge_history(redemptions: &[Redemption], favorites: &[FavoriteEvent]) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = redemptions
        .iter()
        .map(redemption_entry)
        .chain(favorites.iter().map(favorite_entry))
        .collect();
    entries.sort_by_key(|e| std::cmp::Reverse(sort_key(e.occurred_at.as_deref())));
    entries
}

/// Session-scoped feed state: the latest redemption fetch plus every favorite
/// event observed so far. Never persisted.
#[derive(Debug, Default)]
pub struct HistoryFeed {
    redemptions: Vec<Redemption>,
    favorites: Vec<FavoriteEvent>,
}

impl HistoryFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the redemption list with a fresh backend fetch. A failed
    /// fetch upstream surfaces here as an empty list, which leaves the
    /// favorites side of the feed intact.
    pub fn set_redemptions(&mut self, redemptions: Vec<Redemption>) {
        self.redemptions = redemptions;
    }

    /// Appends one observed favorite toggle.
    pub fn record(&mut self, event: FavoriteEvent) {
        self.favorites.push(event);
    }

    /// Drains every event currently buffered on a bus subscription into the
    /// feed. A lagged receiver skips the overwritten events and keeps going.
    pub fn drain(&mut self, rx: &mut broadcast::Receiver<FavoriteEvent>) {
        loop {
            match rx.try_recv() {
                Ok(event) => self.favorites.push(event),
                Err(broadcast::error::TryRecvError::Lagged(_)) => {}
                Err(_) => break,
            }
        }
    }

    /// The merged feed, recomputed on every call.
    #[must_use]
    pub fn entries(&self) -> Vec<HistoryEntry> {
        merge_history(&self.redemptions, &self.favorites)
    }
}
