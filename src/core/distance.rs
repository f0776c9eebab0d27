use crate::types::Coordinates;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two optional points.
///
/// Returns `0.0` when either endpoint is unknown; missing coordinates are a
/// data gap, not an error.
pub fn great_circle_distance_km(
    departure: Option<Coordinates>,
    destination: Option<Coordinates>,
) -> f64 {
    match (departure, destination) {
        (Some(from), Some(to)) => haversine_km(from, to),
        _ => 0.0,
    }
}

pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push `a` a hair above 1 for antipodal points
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}
