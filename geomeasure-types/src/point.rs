use serde::{Deserialize, Serialize};

/// A point on the surface of the Earth given by longitude and latitude in degrees.
///
/// Implement this trait for your own point types to use them with the geodesy functions directly, without
/// converting them into [`Point`] first.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;
    /// Longitude in degrees.
    fn lon(&self) -> f64;
}

/// Point types that can be constructed from geographic coordinates.
pub trait NewGeoPoint: GeoPoint + Sized {
    /// Creates a point from latitude and longitude (in degrees).
    fn latlon(lat: f64, lon: f64) -> Self;

    /// Creates a point from longitude and latitude (in degrees).
    fn lonlat(lon: f64, lat: f64) -> Self {
        Self::latlon(lat, lon)
    }
}

/// 2d point in geographic coordinates.
///
/// Equality is exact: coordinates are compared as plain numbers, without any tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Point {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl Point {
    /// Creates a new point from longitude and latitude in degrees.
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Creates a new point from any other geographic point.
    pub fn from_geo(other: &impl GeoPoint) -> Self {
        Self {
            lng: other.lon(),
            lat: other.lat(),
        }
    }

    /// Coordinates as `[lng, lat]`, the GeoJSON position order.
    pub fn to_array(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl GeoPoint for Point {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lng
    }
}

impl NewGeoPoint for Point {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lng: lon, lat }
    }
}

impl From<[f64; 2]> for Point {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<(f64, f64)> for Point {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

/// Creates a new [`Point`] from longitude and latitude values (in degrees).
///
/// ```
/// use geomeasure_types::{lnglat, GeoPoint};
///
/// let point = lnglat!(52.0, 38.0);
/// assert_eq!(point.lat(), 38.0);
/// assert_eq!(point.lon(), 52.0);
/// ```
#[macro_export]
macro_rules! lnglat {
    ($lng:expr, $lat:expr) => {
        $crate::Point::new($lng, $lat)
    };
}
