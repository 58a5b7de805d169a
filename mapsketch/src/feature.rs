//! The drawn feature data model.

use chrono::{DateTime, Utc};
use mapsketch_types::GeoPoint2d;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SketchError;

/// Type of a drawn feature.
///
/// The type is fixed when the feature is created and never changes, even when
/// overlap trimming replaces the feature's geometric representation (see
/// [`Shape`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    /// Free-form polygon drawn vertex by vertex.
    Polygon,
    /// Axis-aligned (in latitude/longitude) rectangle drawn by two opposite
    /// corners.
    Rectangle,
    /// Circle drawn by center and a point on its boundary.
    Circle,
    /// Open line string drawn vertex by vertex. Exempt from overlap
    /// validation.
    LineString,
}

impl FeatureType {
    /// All feature types in a fixed order.
    pub const ALL: [FeatureType; 4] = [
        FeatureType::Polygon,
        FeatureType::Rectangle,
        FeatureType::Circle,
        FeatureType::LineString,
    ];

    /// Lowercase type tag, as used in the export document and search.
    pub fn tag(&self) -> &'static str {
        match self {
            FeatureType::Polygon => "polygon",
            FeatureType::Rectangle => "rectangle",
            FeatureType::Circle => "circle",
            FeatureType::LineString => "linestring",
        }
    }

    /// Capitalized type name used for auto-generated feature names.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureType::Polygon => "Polygon",
            FeatureType::Rectangle => "Rectangle",
            FeatureType::Circle => "Circle",
            FeatureType::LineString => "Linestring",
        }
    }

    /// Returns true for types that occupy area and take part in overlap
    /// validation.
    pub fn is_polygonal(&self) -> bool {
        !matches!(self, FeatureType::LineString)
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Geometric representation of a drawn feature.
///
/// Usually matches the feature's [`FeatureType`], but overlap trimming
/// replaces the representation of any area shape with `Shape::Polygon`
/// carrying the trimmed outline. A trimmed circle is no longer a true circle,
/// so its center and radius are not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Open (not explicitly closed) polygon ring with at least 3 vertices.
    Polygon(Vec<GeoPoint2d>),
    /// Four ordered corners of a rectangle, open.
    Rectangle([GeoPoint2d; 4]),
    /// Circle given by its center and radius in meters.
    Circle {
        /// Center of the circle.
        center: GeoPoint2d,
        /// Radius in meters, always positive.
        radius_m: f64,
    },
    /// Raw open path with at least 2 vertices.
    Line(Vec<GeoPoint2d>),
}

/// Properties attached to every drawn feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    /// Display name, auto-generated as `"<Type> <N>"` at creation time.
    pub name: String,
    /// Creation time of the feature.
    pub created_at: DateTime<Utc>,
}

/// Opaque unique identifier of a drawn feature, stable for the feature's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(Uuid);

impl FeatureId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A committed or candidate drawn feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnFeature {
    id: FeatureId,
    feature_type: FeatureType,
    shape: Shape,
    properties: FeatureProperties,
}

impl DrawnFeature {
    /// Creates a new feature with a fresh id and the current time as its
    /// creation time.
    pub fn new(feature_type: FeatureType, shape: Shape, name: impl Into<String>) -> Self {
        Self {
            id: FeatureId::new(),
            feature_type,
            shape,
            properties: FeatureProperties {
                name: name.into(),
                created_at: Utc::now(),
            },
        }
    }

    /// Identifier of the feature.
    pub fn id(&self) -> FeatureId {
        self.id
    }

    /// Type tag of the feature, fixed at creation.
    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    /// Current geometric representation of the feature.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Properties of the feature.
    pub fn properties(&self) -> &FeatureProperties {
        &self.properties
    }

    /// Display name of the feature.
    pub fn name(&self) -> &str {
        &self.properties.name
    }

    /// Checks that the geometry is well formed for the feature's type.
    ///
    /// An area shape whose representation has been replaced by a trimmed
    /// polygon outline is valid regardless of its original type.
    pub fn check(&self) -> Result<(), SketchError> {
        match (&self.feature_type, &self.shape) {
            (FeatureType::LineString, Shape::Line(vertices)) => {
                if vertices.len() < 2 {
                    return Err(SketchError::InvalidCandidate(
                        "a line requires at least 2 vertices".into(),
                    ));
                }
            }
            (FeatureType::LineString, _) | (_, Shape::Line(_)) => {
                return Err(SketchError::InvalidCandidate(
                    "line geometry does not match the feature type".into(),
                ));
            }
            (_, Shape::Polygon(vertices)) => {
                if vertices.len() < 3 {
                    return Err(SketchError::InvalidCandidate(
                        "a polygon requires at least 3 vertices".into(),
                    ));
                }
            }
            (_, Shape::Rectangle(corners)) => {
                // Corners are ordered around the perimeter, so two adjacent
                // pairs being distinct means both the latitude and the
                // longitude spans are non-zero.
                if corners[0] == corners[1] || corners[1] == corners[2] {
                    return Err(SketchError::InvalidCandidate(
                        "a rectangle requires two distinct corner points".into(),
                    ));
                }
            }
            (_, Shape::Circle { radius_m, .. }) => {
                if *radius_m <= 0.0 {
                    return Err(SketchError::InvalidCandidate(
                        "a circle requires a positive radius".into(),
                    ));
                }
            }
        }

        Ok(())
    }

    pub(crate) fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }
}

/// Maximum allowed concurrent count of features per type.
///
/// Configurable at startup, read-only at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeLimits {
    /// Maximum number of polygons.
    pub polygon: usize,
    /// Maximum number of rectangles.
    pub rectangle: usize,
    /// Maximum number of circles.
    pub circle: usize,
    /// Maximum number of line strings.
    pub linestring: usize,
}

impl ShapeLimits {
    /// The limit for the given feature type.
    pub fn limit(&self, feature_type: FeatureType) -> usize {
        match feature_type {
            FeatureType::Polygon => self.polygon,
            FeatureType::Rectangle => self.rectangle,
            FeatureType::Circle => self.circle,
            FeatureType::LineString => self.linestring,
        }
    }
}

impl Default for ShapeLimits {
    fn default() -> Self {
        Self {
            polygon: 10,
            rectangle: 8,
            circle: 5,
            linestring: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use mapsketch_types::latlon;

    use super::*;

    #[test]
    fn degenerate_rectangle_is_invalid() {
        let corner = latlon!(10.0, 10.0);
        let feature = DrawnFeature::new(
            FeatureType::Rectangle,
            Shape::Rectangle([corner; 4]),
            "Rectangle 1",
        );
        assert_matches!(feature.check(), Err(SketchError::InvalidCandidate(_)));
    }

    #[test]
    fn zero_radius_circle_is_invalid() {
        let feature = DrawnFeature::new(
            FeatureType::Circle,
            Shape::Circle {
                center: latlon!(0.0, 0.0),
                radius_m: 0.0,
            },
            "Circle 1",
        );
        assert_matches!(feature.check(), Err(SketchError::InvalidCandidate(_)));
    }

    #[test]
    fn two_point_polygon_is_invalid() {
        let feature = DrawnFeature::new(
            FeatureType::Polygon,
            Shape::Polygon(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]),
            "Polygon 1",
        );
        assert_matches!(feature.check(), Err(SketchError::InvalidCandidate(_)));
    }

    #[test]
    fn two_point_line_is_valid() {
        let feature = DrawnFeature::new(
            FeatureType::LineString,
            Shape::Line(vec![latlon!(0.0, 0.0), latlon!(1.0, 1.0)]),
            "Linestring 1",
        );
        assert_matches!(feature.check(), Ok(()));
    }

    #[test]
    fn trimmed_area_shape_keeps_its_type_tag() {
        let mut feature = DrawnFeature::new(
            FeatureType::Circle,
            Shape::Circle {
                center: latlon!(0.0, 0.0),
                radius_m: 100.0,
            },
            "Circle 1",
        );
        feature.set_shape(Shape::Polygon(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 1.0),
            latlon!(1.0, 1.0),
        ]));

        assert_eq!(feature.feature_type(), FeatureType::Circle);
        assert_matches!(feature.check(), Ok(()));
    }

    #[test]
    fn limit_defaults_match_configuration() {
        let limits = ShapeLimits::default();
        assert_eq!(limits.limit(FeatureType::Polygon), 10);
        assert_eq!(limits.limit(FeatureType::Rectangle), 8);
        assert_eq!(limits.limit(FeatureType::Circle), 5);
        assert_eq!(limits.limit(FeatureType::LineString), 15);
    }
}
