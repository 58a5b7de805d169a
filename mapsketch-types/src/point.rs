use serde::{Deserialize, Serialize};

/// A point on the surface of the Earth given in geographic coordinates.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;
}

/// Constructor for a geographic point type.
pub trait NewGeoPoint<Num = f64>: GeoPoint<Num = Num> {
    /// Creates a point from latitude and longitude values in degrees.
    fn latlon(lat: Num, lon: Num) -> Self;
}

/// 2d point on the surface of the Earth.
///
/// Two points are equal only if their coordinates are exactly equal; ring
/// closure and de-duplication rely on this.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Creates a new point from another.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }
}

/// Creates a new [`GeoPoint2d`] from latitude and longitude values (in degrees).
///
/// ```
/// use mapsketch_types::GeoPoint;
/// use mapsketch_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <::mapsketch_types::GeoPoint2d as ::mapsketch_types::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}
