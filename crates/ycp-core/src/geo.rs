//! Coordinate parsing and distance helpers.
//!
//! The backend stores branch positions as PostgreSQL point literals and
//! forwards them verbatim as string fields, e.g. `"(-3.7038,40.4168)"` —
//! longitude first, latitude second. [`parse_point`] turns that text into a
//! [`GeoPoint`]; anything malformed yields `None` and the caller simply
//! omits the marker, never an error.

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    #[must_use]
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

/// Parses a point literal of the form `"(lon,lat)"` into a [`GeoPoint`].
///
/// Parentheses and spaces are trimmed from both ends, so `"(1.5,2.5)"`,
/// `" (1.5,2.5) "` and `"1.5,2.5"` all parse identically. Returns `None`
/// when the string is blank, does not contain exactly two comma-separated
/// tokens, or either token fails numeric parsing.
#[must_use]
pub fn parse_point(raw: &str) -> Option<GeoPoint> {
    let trimmed = raw.trim_matches(|c: char| c == '(' || c == ')' || c == ' ');
    if trimmed.is_empty() {
        return None;
    }
    let mut tokens = trimmed.split(',');
    let longitude = tokens.next()?.trim().parse::<f64>().ok()?;
    let latitude = tokens.next()?.trim().parse::<f64>().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(GeoPoint {
        latitude,
        longitude,
    })
}

/// Formats a distance for marker labels: metres under one kilometre,
/// otherwise kilometres with one decimal.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{km:.1} km")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // parse_point
    // -----------------------------------------------------------------------

    #[test]
    fn parse_point_well_formed_swaps_to_lat_lon() {
        let point = parse_point("(1.5,2.5)").unwrap();
        assert!((point.latitude - 2.5).abs() < f64::EPSILON);
        assert!((point.longitude - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_point_negative_coordinates() {
        let point = parse_point("(-3.7038,40.4168)").unwrap();
        assert!((point.latitude - 40.4168).abs() < f64::EPSILON);
        assert!((point.longitude + 3.7038).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_point_boundary_noise_is_irrelevant() {
        let bare = parse_point("1.5,2.5").unwrap();
        let wrapped = parse_point("(1.5,2.5)").unwrap();
        let padded = parse_point(" (1.5,2.5) ").unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare, padded);
    }

    #[test]
    fn parse_point_inner_spaces_around_tokens() {
        let point = parse_point("( 1.5 , 2.5 )").unwrap();
        assert!((point.latitude - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_point_blank_returns_none() {
        assert!(parse_point("").is_none());
        assert!(parse_point("   ").is_none());
        assert!(parse_point("()").is_none());
    }

    #[test]
    fn parse_point_no_comma_returns_none() {
        assert!(parse_point("(1.5)").is_none());
    }

    #[test]
    fn parse_point_too_many_tokens_returns_none() {
        assert!(parse_point("(1.5,2.5,3.5)").is_none());
    }

    #[test]
    fn parse_point_non_numeric_returns_none() {
        assert!(parse_point("(abc,2.5)").is_none());
        assert!(parse_point("(1.5,xyz)").is_none());
    }

    #[test]
    fn parse_point_empty_token_returns_none() {
        assert!(parse_point("(,2.5)").is_none());
        assert!(parse_point("(1.5,)").is_none());
    }

    // -----------------------------------------------------------------------
    // distance_km / format_distance
    // -----------------------------------------------------------------------

    #[test]
    fn distance_km_zero_for_same_point() {
        let madrid = GeoPoint::new(40.4168, -3.7038);
        assert!(madrid.distance_km(&madrid) < 1e-9);
    }

    #[test]
    fn distance_km_madrid_to_barcelona() {
        let madrid = GeoPoint::new(40.4168, -3.7038);
        let barcelona = GeoPoint::new(41.3874, 2.1686);
        let d = madrid.distance_km(&barcelona);
        assert!((d - 505.0).abs() < 5.0, "expected ~505 km, got {d}");
    }

    #[test]
    fn distance_km_is_symmetric() {
        let a = GeoPoint::new(40.0, -3.0);
        let b = GeoPoint::new(40.01, -3.02);
        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
    }

    #[test]
    fn format_distance_under_a_kilometre_uses_metres() {
        assert_eq!(format_distance(0.85), "850 m");
    }

    #[test]
    fn format_distance_over_a_kilometre_uses_km() {
        assert_eq!(format_distance(1.23), "1.2 km");
    }
}
