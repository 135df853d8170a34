//! Domain core for the youth coupon program client.
//!
//! Holds the pure transformations the screens are built on: parsing branch
//! location strings into coordinates, assembling nearby promotions and
//! collaborators into map markers, and merging redemptions with session-local
//! favorite toggles into one activity feed. Network fetches live in
//! `ycp-api`; this crate only ever sees fully materialized lists.

pub mod app_config;
pub mod categories;
pub mod config;
pub mod favorites;
pub mod geo;
pub mod history;
pub mod models;
pub mod nearby;

pub use app_config::{AppConfig, Environment};
pub use categories::{load_categories, CategoryConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use favorites::{FavoriteEvent, FavoriteKind, FavoritesBus};
pub use geo::{parse_point, GeoPoint};
pub use history::{merge_history, HistoryEntry, HistoryFeed, HistoryKind};
pub use models::{Branch, Collaborator, Promotion, RedeemedPromotion, Redemption};
pub use nearby::{assemble_map, MapMarker, MapView, MarkerKind};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read category catalog at {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse category catalog: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
