//! Map assembly for the nearby-offers screen.
//!
//! Takes the two independently fetched lists (promotions, collaborators) and
//! an optional user position, and produces the marker set plus an overlay
//! summary. Radius filtering already happened server-side; the circle here
//! is a display aid only.

use serde::Serialize;

use crate::geo::GeoPoint;
use crate::models::{Collaborator, Promotion};

/// Fallback map center when no user position is available (Madrid).
pub const DEFAULT_CITY_CENTER: GeoPoint = GeoPoint::new(40.4168, -3.7038);

/// Visual search boundary drawn around the user position.
pub const SEARCH_RADIUS_KM: f64 = 3.0;

/// What a marker represents, and therefore how it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    User,
    Promotion,
    Collaborator,
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerKind::User => write!(f, "user"),
            MarkerKind::Promotion => write!(f, "promotion"),
            MarkerKind::Collaborator => write!(f, "collaborator"),
        }
    }
}

impl MarkerKind {
    /// Pin color on the map, keyed by entity type.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            MarkerKind::User => "#2196f3",
            MarkerKind::Promotion => "#e91e63",
            MarkerKind::Collaborator => "#4caf50",
        }
    }
}

/// One pin on the map.
#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub position: GeoPoint,
    pub label: String,

    /// Distance from the map center; `None` for the user's own marker.
    pub distance_km: Option<f64>,
}

/// Everything the map screen needs to render.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub center: GeoPoint,

    /// Radius circle to draw; only present when centered on a real user
    /// position.
    pub search_radius_km: Option<f64>,

    pub markers: Vec<MapMarker>,
    pub summary: String,
}

fn entity_marker(kind: MarkerKind, position: GeoPoint, label: String, center: GeoPoint) -> MapMarker {
    MapMarker {
        kind,
        position,
        label,
        distance_km: Some(center.distance_km(&position)),
    }
}

/// Assembles the marker set for one map render.
///
/// Entities whose closest-branch location fails to parse are dropped without
/// an error — the screen simply shows fewer pins. A missing user position
/// degrades to [`DEFAULT_CITY_CENTER`] with no radius circle. Markers of the
/// same kind carry no ordering guarantee.
#[must_use]
pub fn assemble_map(
    user: Option<GeoPoint>,
    promotions: &[Promotion],
    collaborators: &[Collaborator],
) -> MapView {
    let center = user.unwrap_or(DEFAULT_CITY_CENTER);

    let mut markers = Vec::with_capacity(promotions.len() + collaborators.len() + 1);
    if let Some(position) = user {
        markers.push(MapMarker {
            kind: MarkerKind::User,
            position,
            label: "You are here".to_string(),
            distance_km: None,
        });
    }

    for promotion in promotions {
        if let Some(position) = promotion.position() {
            markers.push(entity_marker(
                MarkerKind::Promotion,
                position,
                promotion.title.clone(),
                center,
            ));
        }
    }
    for collaborator in collaborators {
        if let Some(position) = collaborator.position() {
            markers.push(entity_marker(
                MarkerKind::Collaborator,
                position,
                collaborator.name.clone(),
                center,
            ));
        }
    }

    let offers = markers
        .iter()
        .filter(|m| m.kind != MarkerKind::User)
        .count();
    let dropped = promotions.len() + collaborators.len() - offers;
    if dropped > 0 {
        tracing::debug!(count = dropped, "omitted entities without a parseable branch location");
    }

    let summary = if offers == 1 {
        "1 offer nearby".to_string()
    } else {
        format!("{offers} offers nearby")
    };

    MapView {
        center,
        search_radius_km: user.map(|_| SEARCH_RADIUS_KM),
        markers,
        summary,
    }
}
