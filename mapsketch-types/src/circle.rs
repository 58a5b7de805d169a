use crate::{close_ring, destination, GeoPoint2d};

/// Number of segments used to approximate a circle with a polygon ring.
pub const CIRCLE_SEGMENTS: usize = 64;

/// Approximates a circle with a closed polygon ring.
///
/// The ring consists of `segments` points placed at the given great-circle
/// distance from `center`, at equally spaced bearings starting from north,
/// plus the closing duplicate of the first point. The approximation is planar
/// in nature and slightly underestimates the circle's area, which is accepted
/// for validation purposes.
///
/// `segments` must be at least 3 to produce a ring with area.
pub fn circle_to_ring(center: GeoPoint2d, radius_m: f64, segments: usize) -> Vec<GeoPoint2d> {
    let mut ring = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let bearing_deg = i as f64 * 360.0 / segments as f64;
        ring.push(destination(center, bearing_deg, radius_m));
    }

    close_ring(&mut ring);
    ring
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{distance_m, is_closed, NewGeoPoint};

    #[test]
    fn ring_has_segment_count_plus_closing_point() {
        let center = GeoPoint2d::latlon(0.0, 0.0);
        let ring = circle_to_ring(center, 1_000.0, CIRCLE_SEGMENTS);
        assert_eq!(ring.len(), CIRCLE_SEGMENTS + 1);
        assert!(is_closed(&ring));
    }

    #[test]
    fn all_points_lie_on_the_circle() {
        let center = GeoPoint2d::latlon(48.8566, 2.3522);
        let ring = circle_to_ring(center, 500.0, CIRCLE_SEGMENTS);
        for point in &ring {
            assert_abs_diff_eq!(distance_m(center, *point), 500.0, epsilon = 1e-3);
        }
    }
}
