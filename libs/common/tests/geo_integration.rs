//! Integration tests for the geo helpers
//!
//! These exercise the public API the services rely on for radius searches.

use common::geo::{Coordinates, GeoError, haversine_km};

/// Roughly 0.09 degrees of latitude is 10 km; the boundary must be honoured
#[test]
fn test_radius_boundary_around_ten_kilometres() {
    let origin = Coordinates::new(12.9716, 77.5946).unwrap();
    let inside = Coordinates::new(12.9716 + 0.0899, 77.5946).unwrap();
    let outside = Coordinates::new(12.9716 + 0.0901, 77.5946).unwrap();

    assert!(haversine_km(&origin, &inside) <= 10.0);
    assert!(haversine_km(&origin, &outside) > 10.0);
}

#[test]
fn test_longitude_degrees_shrink_towards_the_poles() {
    let equator = haversine_km(
        &Coordinates::new(0.0, 0.0).unwrap(),
        &Coordinates::new(0.0, 1.0).unwrap(),
    );
    let arctic = haversine_km(
        &Coordinates::new(70.0, 0.0).unwrap(),
        &Coordinates::new(70.0, 1.0).unwrap(),
    );

    assert!(arctic < equator / 2.0);
}

#[test]
fn test_distance_across_the_antimeridian() {
    let west = Coordinates::new(0.0, 179.95).unwrap();
    let east = Coordinates::new(0.0, -179.95).unwrap();

    assert!(haversine_km(&west, &east) < 12.0);
}

#[test]
fn test_error_messages_are_client_facing() {
    assert_eq!(
        GeoError::IncompletePair.to_string(),
        "Latitude and longitude must be provided together"
    );
}
