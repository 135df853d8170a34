//! The `nearby` command: fetch both entity lists and print the map view.

use anyhow::Context;

use ycp_api::CouponClient;
use ycp_core::geo::{format_distance, GeoPoint};
use ycp_core::nearby::{assemble_map, DEFAULT_CITY_CENTER, SEARCH_RADIUS_KM};
use ycp_core::AppConfig;

pub(crate) async fn run(
    config: &AppConfig,
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<()> {
    let user = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        _ => None,
    };
    if user.is_none() {
        tracing::info!("no user position supplied — centering on the default city");
    }
    let center = user.unwrap_or(DEFAULT_CITY_CENTER);

    let client = CouponClient::from_config(config).context("failed to build backend client")?;
    let (promotions, collaborators) = futures::join!(
        client.nearby_promotions(center, SEARCH_RADIUS_KM),
        client.nearby_collaborators(center, SEARCH_RADIUS_KM),
    );

    // One list failing never blanks the other: the map just shows fewer pins.
    let promotions = promotions.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "promotion fetch failed — showing none");
        Vec::new()
    });
    let collaborators = collaborators.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "collaborator fetch failed — showing none");
        Vec::new()
    });
    tracing::info!(
        promotions = promotions.len(),
        collaborators = collaborators.len(),
        "nearby entities fetched"
    );

    let view = assemble_map(user, &promotions, &collaborators);
    println!("{}", view.summary);
    println!(
        "center: {:.4}, {:.4}",
        view.center.latitude, view.center.longitude
    );
    if let Some(radius) = view.search_radius_km {
        println!("search radius: {radius} km");
    }
    for marker in &view.markers {
        match marker.distance_km {
            Some(d) => println!(
                "  [{}] {} — {}",
                marker.kind,
                marker.label,
                format_distance(d)
            ),
            None => println!("  [{}] {}", marker.kind, marker.label),
        }
    }

    Ok(())
}
