//! Domain records for collaborators, promotions and redemptions.
//!
//! These are explicit, versioned shapes: every field the backend may omit is
//! an `Option` with a defined default, rather than a runtime field probe.
//! Displayable positions are derived by parsing the closest branch's raw
//! location string on every read — nothing is cached or written back.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::{parse_point, GeoPoint};

/// A physical location belonging to a collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Raw point literal as supplied by the backend, e.g. `"(-3.70,40.41)"`.
    #[serde(default)]
    pub location: Option<String>,
}

impl Branch {
    /// Display position, recomputed from the raw location string on every
    /// read. `None` when the string is absent or malformed.
    #[must_use]
    pub fn position(&self) -> Option<GeoPoint> {
        self.location.as_deref().and_then(parse_point)
    }
}

/// A partner business participating in the coupon program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: Uuid,
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub logo_url: Option<String>,

    /// Branch nearest to the queried position, when the backend computed one.
    #[serde(default)]
    pub closest_branch: Option<Branch>,
}

impl Collaborator {
    #[must_use]
    pub fn position(&self) -> Option<GeoPoint> {
        self.closest_branch.as_ref().and_then(Branch::position)
    }
}

/// A coupon/offer record tied to a collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: Uuid,
    pub title: String,

    #[serde(default)]
    pub business_name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub closest_branch: Option<Branch>,
}

impl Promotion {
    #[must_use]
    pub fn position(&self) -> Option<GeoPoint> {
        self.closest_branch.as_ref().and_then(Branch::position)
    }
}

/// Promotion details attached to a redemption record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemedPromotion {
    pub title: String,

    #[serde(default)]
    pub business_name: Option<String>,
}

/// A redeemed coupon, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redemption {
    /// RFC 3339 timestamp of when the coupon was used. Absent on legacy rows.
    #[serde(default)]
    pub used_at: Option<String>,

    /// Linked promotion. Absent when the promotion was since deleted.
    #[serde(default)]
    pub promotion: Option<RedeemedPromotion>,
}
