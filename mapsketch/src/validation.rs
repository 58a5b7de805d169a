//! Overlap and containment validation of candidate shapes.
//!
//! A candidate area shape (polygon, rectangle or circle) may only be
//! committed if it does not sit inside an existing area shape and does not
//! swallow one. Partial overlaps are not rejected; instead the overlapping
//! area is trimmed away from the candidate. Line strings are exempt from all
//! of this.
//!
//! The functions here are pure: they never mutate the store, and the caller
//! decides what to do with the trimmed result.

use geo::{Area, BooleanOps, Contains};
use geo_types::{Coord, LineString, MultiPolygon, Polygon};
use mapsketch_types::{circle_to_ring, closed_ring, GeoPoint2d, CIRCLE_SEGMENTS};

use crate::error::SketchError;
use crate::feature::{DrawnFeature, Shape};

/// The polygonal geometry of a feature, or `None` for line strings.
///
/// Circles are discretized with [`CIRCLE_SEGMENTS`] segments; the returned
/// geometry is used for testing only and does not replace the feature's
/// stored center and radius.
pub fn polygonal(feature: &DrawnFeature) -> Option<Polygon<f64>> {
    match feature.shape() {
        Shape::Polygon(vertices) => Some(ring_polygon(vertices)),
        Shape::Rectangle(corners) => Some(ring_polygon(corners.as_slice())),
        Shape::Circle { center, radius_m } => Some(ring_polygon(&circle_to_ring(
            *center,
            *radius_m,
            CIRCLE_SEGMENTS,
        ))),
        Shape::Line(_) => None,
    }
}

/// Validates a candidate feature against the existing features, in their
/// store order.
///
/// For every existing area shape the current candidate geometry is tested:
/// full containment either way rejects the candidate, a partial overlap
/// replaces the candidate with the boolean difference `candidate - existing`.
/// Shapes that only touch along a boundary do not count as overlapping.
///
/// Returns `Ok(None)` if the candidate survived untouched, or
/// `Ok(Some(shape))` with the trimmed outline that should be stored instead
/// of the original geometry. When trimming splits the candidate into several
/// disjoint parts, the largest part by area is kept.
pub fn validate(
    candidate: &DrawnFeature,
    existing: &[DrawnFeature],
) -> Result<Option<Shape>, SketchError> {
    let Some(mut trimmed) = polygonal(candidate) else {
        // Line strings are exempt from overlap rules.
        return Ok(None);
    };

    let mut was_trimmed = false;
    for other in existing.iter().filter_map(polygonal) {
        if other.contains(&trimmed) {
            return Err(SketchError::FullyContained);
        }

        if trimmed.contains(&other) {
            return Err(SketchError::WouldEnclose);
        }

        if trimmed.intersection(&other).unsigned_area() > 0.0 {
            trimmed =
                largest_part(trimmed.difference(&other)).ok_or(SketchError::EmptyAfterTrim)?;
            was_trimmed = true;
        }
    }

    if was_trimmed {
        Ok(Some(Shape::Polygon(open_ring(&trimmed))))
    } else {
        Ok(None)
    }
}

fn ring_polygon(vertices: &[GeoPoint2d]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = closed_ring(vertices).into_iter().map(Into::into).collect();
    Polygon::new(LineString::from(coords), vec![])
}

/// The largest part of a multi-polygon by area, or `None` if no part has
/// positive area.
fn largest_part(parts: MultiPolygon<f64>) -> Option<Polygon<f64>> {
    parts
        .into_iter()
        .filter(|part| part.unsigned_area() > 0.0)
        .max_by(|a, b| {
            a.unsigned_area()
                .partial_cmp(&b.unsigned_area())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// The exterior ring of the polygon as an open vertex sequence.
fn open_ring(polygon: &Polygon<f64>) -> Vec<GeoPoint2d> {
    let coords = &polygon.exterior().0;
    let open = match coords.split_last() {
        Some((last, rest)) if Some(last) == rest.first() => rest,
        _ => coords.as_slice(),
    };
    open.iter().map(|c| (*c).into()).collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use mapsketch_types::latlon;

    use super::*;
    use crate::feature::FeatureType;

    fn square(min_lat: f64, min_lon: f64, size: f64) -> DrawnFeature {
        DrawnFeature::new(
            FeatureType::Polygon,
            Shape::Polygon(vec![
                latlon!(min_lat, min_lon),
                latlon!(min_lat, min_lon + size),
                latlon!(min_lat + size, min_lon + size),
                latlon!(min_lat + size, min_lon),
            ]),
            "test",
        )
    }

    fn circle(lat: f64, lon: f64, radius_m: f64) -> DrawnFeature {
        DrawnFeature::new(
            FeatureType::Circle,
            Shape::Circle {
                center: latlon!(lat, lon),
                radius_m,
            },
            "test",
        )
    }

    fn area_of(feature: &DrawnFeature) -> f64 {
        polygonal(feature).map(|p| p.unsigned_area()).unwrap_or(0.0)
    }

    #[test]
    fn disjoint_candidate_is_untouched() {
        let existing = [square(0.0, 0.0, 1.0)];
        let candidate = square(0.0, 5.0, 1.0);
        assert_matches!(validate(&candidate, &existing), Ok(None));
    }

    #[test]
    fn boundary_contact_is_not_an_overlap() {
        let existing = [square(0.0, 0.0, 2.0)];
        let candidate = square(0.0, 2.0, 2.0);
        assert_matches!(validate(&candidate, &existing), Ok(None));
    }

    #[test]
    fn contained_candidate_is_rejected() {
        let existing = [square(0.0, 0.0, 10.0)];
        let candidate = square(2.0, 2.0, 2.0);
        assert_matches!(
            validate(&candidate, &existing),
            Err(SketchError::FullyContained)
        );
    }

    #[test]
    fn enclosing_candidate_is_rejected() {
        let existing = [square(2.0, 2.0, 2.0)];
        let candidate = square(0.0, 0.0, 10.0);
        assert_matches!(
            validate(&candidate, &existing),
            Err(SketchError::WouldEnclose)
        );
    }

    #[test]
    fn partial_overlap_trims_the_candidate() {
        let existing = [square(0.0, 0.0, 2.0)];
        // Overlaps the right half of the existing square.
        let candidate = square(0.0, 1.0, 2.0);

        let trimmed = validate(&candidate, &existing)
            .expect("validation failed")
            .expect("candidate was not trimmed");

        let mut committed = candidate.clone();
        committed.set_shape(trimmed);
        assert!(area_of(&committed) > 0.0);
        assert!(area_of(&committed) < area_of(&candidate));
    }

    #[test]
    fn candidate_is_trimmed_against_every_existing_shape() {
        let existing = [square(0.0, 0.0, 2.0), square(0.0, 8.0, 2.0)];
        // Overlaps both existing squares from above.
        let candidate = square(1.0, -1.0, 11.0);

        let trimmed = validate(&candidate, &existing)
            .expect("validation failed")
            .expect("candidate was not trimmed");

        let mut committed = candidate.clone();
        committed.set_shape(trimmed);
        let lost = area_of(&candidate) - area_of(&committed);
        // Two square lat/lon units cut away by each of the two existing shapes.
        assert!((lost - 4.0).abs() < 1e-9);
    }

    #[test]
    fn trim_keeps_largest_ring() {
        // A vertical bar splits the horizontal candidate into two parts,
        // 4 units to the left and 5 units to the right.
        let existing = [square_bar(-1.0, 4.0, 3.0, 1.0)];
        let candidate = square_bar(0.0, 0.0, 1.0, 10.0);

        let trimmed = validate(&candidate, &existing)
            .expect("validation failed")
            .expect("candidate was not trimmed");

        let Shape::Polygon(ring) = trimmed else {
            panic!("trimmed shape is not a polygon");
        };
        use mapsketch_types::GeoPoint;
        let min_lon = ring.iter().map(|p| p.lon()).fold(f64::INFINITY, f64::min);
        assert!((min_lon - 5.0).abs() < 1e-9);
    }

    #[test]
    fn small_circle_inside_large_circle_is_rejected() {
        let existing = [circle(0.0, 0.0, 1_000.0)];
        let candidate = circle(0.0, 0.0, 10.0);
        assert_matches!(
            validate(&candidate, &existing),
            Err(SketchError::FullyContained)
        );
    }

    #[test]
    fn line_strings_are_exempt() {
        let existing = [square(0.0, 0.0, 10.0)];
        let candidate = DrawnFeature::new(
            FeatureType::LineString,
            Shape::Line(vec![latlon!(-5.0, -5.0), latlon!(5.0, 5.0)]),
            "test",
        );
        assert_matches!(validate(&candidate, &existing), Ok(None));
    }

    fn square_bar(min_lat: f64, min_lon: f64, height: f64, width: f64) -> DrawnFeature {
        DrawnFeature::new(
            FeatureType::Polygon,
            Shape::Polygon(vec![
                latlon!(min_lat, min_lon),
                latlon!(min_lat, min_lon + width),
                latlon!(min_lat + height, min_lon + width),
                latlon!(min_lat + height, min_lon),
            ]),
            "test",
        )
    }
}
