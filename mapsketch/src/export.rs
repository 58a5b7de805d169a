//! GeoJSON export of the committed feature collection.
//!
//! The codec is a pure function of the store's current contents; writing the
//! produced document to a file or offering it as a download is the hosting
//! application's concern.

use chrono::SecondsFormat;
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use mapsketch_types::{closed_ring, GeoPoint, GeoPoint2d};

use crate::error::SketchError;
use crate::feature::{DrawnFeature, Shape};
use crate::store::FeatureStore;

/// Converts a single drawn feature into a GeoJSON feature.
///
/// Polygons and rectangles become single-ring `Polygon` geometries with an
/// explicitly closed ring; a rectangle ring always has exactly 5 positions.
/// An untrimmed circle becomes a `Point` at its center with the radius
/// carried in the `radius` property; a circle whose shape was replaced by a
/// trimmed outline exports that outline as a `Polygon` and has no radius.
/// Line strings become open `LineString` geometries.
pub fn feature_to_geojson(feature: &DrawnFeature) -> Feature {
    let value = match feature.shape() {
        Shape::Polygon(vertices) => Value::Polygon(vec![ring_positions(vertices)]),
        Shape::Rectangle(corners) => Value::Polygon(vec![ring_positions(corners.as_slice())]),
        Shape::Circle { center, .. } => Value::Point(position(*center)),
        Shape::Line(vertices) => Value::LineString(positions(vertices)),
    };

    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), JsonValue::from(feature.name()));
    properties.insert(
        "createdAt".to_string(),
        JsonValue::from(
            feature
                .properties()
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
    );
    properties.insert(
        "featureType".to_string(),
        JsonValue::from(feature.feature_type().tag()),
    );
    if let Shape::Circle { radius_m, .. } = feature.shape() {
        properties.insert("radius".to_string(), JsonValue::from(*radius_m));
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: Some(Id::String(feature.id().to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// The feature collection document for the store's current contents, in
/// store order.
pub fn export_document(store: &FeatureStore) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: store.features().iter().map(feature_to_geojson).collect(),
        foreign_members: None,
    }
}

/// The feature collection document serialized as pretty-printed JSON.
pub fn export_string(store: &FeatureStore) -> Result<String, SketchError> {
    Ok(serde_json::to_string_pretty(&export_document(store))?)
}

/// GeoJSON position for a point: `[lon, lat]`.
fn position(point: GeoPoint2d) -> Vec<f64> {
    vec![point.lon(), point.lat()]
}

fn positions(vertices: &[GeoPoint2d]) -> Vec<Vec<f64>> {
    vertices.iter().map(|p| position(*p)).collect()
}

fn ring_positions(vertices: &[GeoPoint2d]) -> Vec<Vec<f64>> {
    positions(&closed_ring(vertices))
}
