//! The `promotions` and `categories` commands.

use anyhow::{bail, Context};

use ycp_api::CouponClient;
use ycp_core::categories::load_categories;
use ycp_core::AppConfig;

pub(crate) async fn promotions(config: &AppConfig, category: Option<&str>) -> anyhow::Result<()> {
    if let Some(slug) = category {
        let catalog = load_categories(&config.categories_path)
            .context("failed to load category catalog")?;
        if !catalog.categories.iter().any(|c| c.slug() == slug) {
            bail!("unknown category '{slug}' — run `ycp-cli categories` to list them");
        }
    }

    let client = CouponClient::from_config(config).context("failed to build backend client")?;
    let promotions = client
        .list_promotions(category)
        .await
        .context("failed to fetch promotions")?;
    tracing::info!(count = promotions.len(), category, "promotions fetched");

    if promotions.is_empty() {
        println!("no promotions found");
        return Ok(());
    }
    for promotion in promotions {
        let business = promotion.business_name.as_deref().unwrap_or("—");
        let category = promotion.category.as_deref().unwrap_or("uncategorized");
        println!("{}  ({business}, {category})", promotion.title);
    }

    Ok(())
}

pub(crate) fn categories(config: &AppConfig) -> anyhow::Result<()> {
    let catalog =
        load_categories(&config.categories_path).context("failed to load category catalog")?;
    for category in &catalog.categories {
        match &category.description {
            Some(description) => println!("{}  {} — {description}", category.slug(), category.name),
            None => println!("{}  {}", category.slug(), category.name),
        }
    }
    Ok(())
}
