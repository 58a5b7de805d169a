use geo::{HaversineDestination, HaversineDistance};
use geo_types::Point;

use crate::GeoPoint2d;

/// Great-circle distance between two points in meters.
///
/// Uses the haversine formula over the WGS84 mean Earth radius; accurate to
/// about 0.5% of the true geodesic distance, which is sufficient for drawn
/// shapes.
pub fn distance_m(a: GeoPoint2d, b: GeoPoint2d) -> f64 {
    Point::from(a).haversine_distance(&Point::from(b))
}

/// The point at the given great-circle distance (meters) and bearing
/// (degrees clockwise from north) from `origin`.
pub fn destination(origin: GeoPoint2d, bearing_deg: f64, distance_m: f64) -> GeoPoint2d {
    Point::from(origin)
        .haversine_destination(bearing_deg, distance_m)
        .into()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::NewGeoPoint;

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = GeoPoint2d::latlon(0.0, 0.0);
        let b = GeoPoint2d::latlon(0.0, 1.0);
        // 2 * pi * R / 360 for the mean Earth radius
        assert_abs_diff_eq!(distance_m(a, b), 111_195.0, epsilon = 5.0);
    }

    #[test]
    fn destination_round_trips_distance() {
        let origin = GeoPoint2d::latlon(40.7128, -74.0060);
        let target = destination(origin, 73.0, 2_500.0);
        assert_abs_diff_eq!(distance_m(origin, target), 2_500.0, epsilon = 1e-3);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = GeoPoint2d::latlon(52.0, 10.0);
        assert_eq!(distance_m(a, a), 0.0);
    }
}
