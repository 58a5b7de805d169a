//! Interop with the `geo-types` crate.
//!
//! `geo-types` uses planar `x`/`y` coordinates; for geographic data the
//! convention (shared with GeoJSON) is `x` = longitude, `y` = latitude.

use geo_types::{coord, Coord, Point};

use crate::{GeoPoint, GeoPoint2d, NewGeoPoint};

impl From<GeoPoint2d> for Coord<f64> {
    fn from(value: GeoPoint2d) -> Self {
        coord! { x: value.lon(), y: value.lat() }
    }
}

impl From<Coord<f64>> for GeoPoint2d {
    fn from(value: Coord<f64>) -> Self {
        GeoPoint2d::latlon(value.y, value.x)
    }
}

impl From<GeoPoint2d> for Point<f64> {
    fn from(value: GeoPoint2d) -> Self {
        Point::new(value.lon(), value.lat())
    }
}

impl From<Point<f64>> for GeoPoint2d {
    fn from(value: Point<f64>) -> Self {
        GeoPoint2d::latlon(value.y(), value.x())
    }
}
