//! Wire types for the coupon backend's JSON payloads.
//!
//! ## Observed shape
//!
//! The backend serializes camelCase and omits absent fields rather than
//! sending `null`; every optional field therefore carries
//! `#[serde(default)]`. Branch positions arrive as PostgreSQL point
//! literals forwarded verbatim in the `location` string (`"(lon,lat)"`) —
//! they are parsed client-side, never here.
//!
//! Conversion into `ycp-core` models is total: nothing in these records can
//! fail to convert, missing data simply stays `None`.

use serde::Deserialize;
use uuid::Uuid;

use ycp_core::models::{Branch, Collaborator, Promotion, RedeemedPromotion, Redemption};

/// A branch as attached to a nearby promotion or collaborator.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRecord {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Point literal, e.g. `"(-3.7038,40.4168)"`. May be absent or garbage;
    /// the core parser decides.
    #[serde(default)]
    pub location: Option<String>,
}

impl From<BranchRecord> for Branch {
    fn from(record: BranchRecord) -> Self {
        Branch {
            id: record.id,
            name: record.name,
            address: record.address,
            location: record.location,
        }
    }
}

/// A promotion row from the nearby or category-filtered listings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRecord {
    pub id: Uuid,
    pub title: String,

    #[serde(default)]
    pub business_name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub closest_branch: Option<BranchRecord>,
}

impl From<PromotionRecord> for Promotion {
    fn from(record: PromotionRecord) -> Self {
        Promotion {
            id: record.id,
            title: record.title,
            business_name: record.business_name,
            category: record.category,
            description: record.description,
            closest_branch: record.closest_branch.map(Branch::from),
        }
    }
}

/// A collaborator row from the nearby listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorRecord {
    pub id: Uuid,
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub closest_branch: Option<BranchRecord>,
}

impl From<CollaboratorRecord> for Collaborator {
    fn from(record: CollaboratorRecord) -> Self {
        Collaborator {
            id: record.id,
            name: record.name,
            category: record.category,
            logo_url: record.logo_url,
            closest_branch: record.closest_branch.map(Branch::from),
        }
    }
}

/// Promotion details nested in a redemption row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemedPromotionRecord {
    pub title: String,

    #[serde(default)]
    pub business_name: Option<String>,
}

/// A redemption row from the user's history.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRecord {
    /// RFC 3339 timestamp; absent on legacy rows.
    #[serde(default)]
    pub used_at: Option<String>,

    /// Absent when the promotion was deleted after redemption.
    #[serde(default)]
    pub promotion: Option<RedeemedPromotionRecord>,
}

impl From<RedemptionRecord> for Redemption {
    fn from(record: RedemptionRecord) -> Self {
        Redemption {
            used_at: record.used_at,
            promotion: record.promotion.map(|p| RedeemedPromotion {
                title: p.title,
                business_name: p.business_name,
            }),
        }
    }
}
