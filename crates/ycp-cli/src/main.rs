use anyhow::Context;
use clap::{Parser, Subcommand};
use uuid::Uuid;

mod browse;
mod history;
mod nearby;

#[derive(Debug, Parser)]
#[command(name = "ycp-cli")]
#[command(about = "Youth coupon program command line client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show nearby offers as map markers.
    Nearby {
        /// Latitude of the user position; omit both coordinates to fall back
        /// to the default city center.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude of the user position.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Show a user's activity feed (redeemed coupons and favorite toggles).
    History {
        #[arg(long)]
        user: Uuid,
    },

    /// List promotions, optionally filtered by category slug.
    Promotions {
        #[arg(long)]
        category: Option<String>,
    },

    /// List the browsable categories.
    Categories,
}

fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ycp_core::load_app_config().context("failed to load configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Nearby { lat, lon } => nearby::run(&config, lat, lon).await,
        Commands::History { user } => history::run(&config, user).await,
        Commands::Promotions { category } => browse::promotions(&config, category.as_deref()).await,
        Commands::Categories => browse::categories(&config),
    }
}
