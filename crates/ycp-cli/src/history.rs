//! The `history` command: print a user's merged activity feed.

use anyhow::Context;
use uuid::Uuid;

use ycp_api::CouponClient;
use ycp_core::history::HistoryFeed;
use ycp_core::AppConfig;

pub(crate) async fn run(config: &AppConfig, user: Uuid) -> anyhow::Result<()> {
    let client = CouponClient::from_config(config).context("failed to build backend client")?;

    // Favorite toggles are session-local and never persisted, so a fresh CLI
    // session always starts with an empty favorites side of the feed.
    let mut feed = HistoryFeed::new();
    match client.redemption_history(user).await {
        Ok(redemptions) => {
            tracing::info!(count = redemptions.len(), "redemption history fetched");
            feed.set_redemptions(redemptions);
        }
        Err(e) => {
            tracing::warn!(error = %e, "redemption fetch failed — feed shows favorites only");
        }
    }

    let entries = feed.entries();
    if entries.is_empty() {
        println!("no activity yet");
        return Ok(());
    }
    for entry in entries {
        let when = entry.occurred_at.as_deref().unwrap_or("unknown time");
        match &entry.subtitle {
            Some(subtitle) => println!("{when}  [{}] {} — {subtitle}", entry.kind, entry.title),
            None => println!("{when}  [{}] {}", entry.kind, entry.title),
        }
    }

    Ok(())
}
