/// Returns true if the ring is explicitly closed, i.e. its last point is
/// exactly equal to its first.
///
/// Rings with fewer than two points are never considered closed.
pub fn is_closed<P: PartialEq>(ring: &[P]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 => first == last,
        _ => false,
    }
}

/// Closes the ring by appending a copy of the first point, unless the last
/// point is already exactly equal to it.
///
/// Idempotent; does nothing for an empty ring. Equality is exact coordinate
/// equality, not approximate.
pub fn close_ring<P: PartialEq + Clone>(ring: &mut Vec<P>) {
    if ring.is_empty() || is_closed(ring) {
        return;
    }

    let first = ring[0].clone();
    ring.push(first);
}

/// Returns a closed copy of the ring.
pub fn closed_ring<P: PartialEq + Clone>(ring: &[P]) -> Vec<P> {
    let mut owned = ring.to_vec();
    close_ring(&mut owned);
    owned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint2d;
    use crate::NewGeoPoint;

    #[test]
    fn close_ring_appends_first_point() {
        let mut ring = vec![
            GeoPoint2d::latlon(0.0, 0.0),
            GeoPoint2d::latlon(0.0, 1.0),
            GeoPoint2d::latlon(1.0, 1.0),
        ];
        close_ring(&mut ring);
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);
    }

    #[test]
    fn close_ring_is_idempotent() {
        let mut ring = vec![
            GeoPoint2d::latlon(0.0, 0.0),
            GeoPoint2d::latlon(0.0, 1.0),
            GeoPoint2d::latlon(1.0, 1.0),
        ];
        close_ring(&mut ring);
        let closed = ring.clone();
        close_ring(&mut ring);
        assert_eq!(ring, closed);
    }

    #[test]
    fn close_ring_ignores_empty_input() {
        let mut ring: Vec<GeoPoint2d> = vec![];
        close_ring(&mut ring);
        assert!(ring.is_empty());
    }

    #[test]
    fn single_point_is_not_closed() {
        let ring = vec![GeoPoint2d::latlon(0.0, 0.0)];
        assert!(!is_closed(&ring));
    }
}
