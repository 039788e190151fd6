//! Distance, bearing, destination and midpoint of points on a spherical Earth.

use geomeasure_types::{GeoPoint, Point};

use crate::angle::{bearing_to_azimuth, degrees_to_radians, normalize_longitude, radians_to_degrees};
use crate::units::{length_to_radians, radians_to_length, Unit};

/// Great-circle distance between two coordinate pairs (haversine formula).
pub fn distance(lng1: f64, lat1: f64, lng2: f64, lat2: f64, unit: Unit) -> f64 {
    let d_lat = degrees_to_radians(lat2 - lat1);
    let d_lng = degrees_to_radians(lng2 - lng1);
    let lat1 = degrees_to_radians(lat1);
    let lat2 = degrees_to_radians(lat2);

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lng = (d_lng / 2.0).sin();
    // Rounding can push `a` above 1 for antipodal points.
    let a = (sin_lat * sin_lat + sin_lng * sin_lng * lat1.cos() * lat2.cos()).min(1.0);

    radians_to_length(2.0 * a.sqrt().atan2((1.0 - a).sqrt()), unit)
}

/// Great-circle distance between two points.
pub fn point_distance(from: &impl GeoPoint, to: &impl GeoPoint, unit: Unit) -> f64 {
    distance(from.lon(), from.lat(), to.lon(), to.lat(), unit)
}

/// Initial bearing of the great circle path from the first coordinate pair to the second one.
///
/// The bearing is measured in degrees clockwise from the north and is in the range `[0, 360)`.
pub fn bearing(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    let d_lng = degrees_to_radians(lng2 - lng1);
    let lat1 = degrees_to_radians(lat1);
    let lat2 = degrees_to_radians(lat2);

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    bearing_to_azimuth(radians_to_degrees(y.atan2(x)))
}

/// Initial bearing of the great circle path between two points. See [`bearing`].
pub fn point_bearing(from: &impl GeoPoint, to: &impl GeoPoint) -> f64 {
    bearing(from.lon(), from.lat(), to.lon(), to.lat())
}

/// Point reached by travelling `distance` along the great circle that leaves `origin` with the given `bearing`
/// (in degrees).
///
/// Longitude of the result is wrapped into `(-180, 180]`.
pub fn destination(origin: &impl GeoPoint, distance: f64, bearing: f64, unit: Unit) -> Point {
    let lng1 = degrees_to_radians(origin.lon());
    let lat1 = degrees_to_radians(origin.lat());
    let bearing = degrees_to_radians(bearing);
    let delta = length_to_radians(distance, unit);

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lng2 = lng1
        + (bearing.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Point::new(
        normalize_longitude(radians_to_degrees(lng2)),
        radians_to_degrees(lat2),
    )
}

/// Point halfway between two points along the great circle connecting them.
pub fn midpoint(a: &impl GeoPoint, b: &impl GeoPoint) -> Point {
    if a.lon() == b.lon() && a.lat() == b.lat() {
        return Point::new(a.lon(), a.lat());
    }

    let d_lng = degrees_to_radians(b.lon() - a.lon());
    let lat1 = degrees_to_radians(a.lat());
    let lat2 = degrees_to_radians(b.lat());
    let lng1 = degrees_to_radians(a.lon());

    let bx = lat2.cos() * d_lng.cos();
    let by = lat2.cos() * d_lng.sin();
    let mid_lat = (lat1.sin() + lat2.sin())
        .atan2(((lat1.cos() + bx) * (lat1.cos() + bx) + by * by).sqrt());
    let mid_lng = lng1 + by.atan2(lat1.cos() + bx);

    Point::new(
        normalize_longitude(radians_to_degrees(mid_lng)),
        radians_to_degrees(mid_lat),
    )
}

/// Geodesic operations as methods of any [`GeoPoint`].
pub trait GeodesicPoint: GeoPoint {
    /// See [`point_distance`].
    fn distance_to(&self, other: &impl GeoPoint, unit: Unit) -> f64
    where
        Self: Sized,
    {
        point_distance(self, other, unit)
    }

    /// See [`point_bearing`].
    fn bearing_to(&self, other: &impl GeoPoint) -> f64
    where
        Self: Sized,
    {
        point_bearing(self, other)
    }

    /// See [`destination`].
    fn destination(&self, distance: f64, bearing: f64, unit: Unit) -> Point
    where
        Self: Sized,
    {
        destination(self, distance, bearing, unit)
    }

    /// See [`midpoint`].
    fn midpoint(&self, other: &impl GeoPoint) -> Point
    where
        Self: Sized,
    {
        midpoint(self, other)
    }
}

impl<T: GeoPoint> GeodesicPoint for T {}
