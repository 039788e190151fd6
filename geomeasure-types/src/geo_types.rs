//! Interoperability with the [`geo_types`] crate.
//!
//! `geo_types` geometries do not carry their coordinate space, so `x` is taken as the longitude and `y` as the
//! latitude.

use geo_types::{coord, point, Coord};

use crate::line_string::{LineString, Ring};
use crate::point::{GeoPoint, NewGeoPoint, Point};
use crate::polygon::Polygon;

impl GeoPoint for geo_types::Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }

    fn lon(&self) -> f64 {
        self.x()
    }
}

impl NewGeoPoint for geo_types::Point<f64> {
    fn latlon(lat: f64, lon: f64) -> Self {
        point!(x: lon, y: lat)
    }
}

impl GeoPoint for Coord<f64> {
    fn lat(&self) -> f64 {
        self.y
    }

    fn lon(&self) -> f64 {
        self.x
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point::new(value.x(), value.y())
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(value: Point) -> Self {
        point!(x: value.lng, y: value.lat)
    }
}

impl From<Point> for Coord<f64> {
    fn from(value: Point) -> Self {
        coord! { x: value.lng, y: value.lat }
    }
}

impl From<&geo_types::LineString<f64>> for LineString {
    fn from(value: &geo_types::LineString<f64>) -> Self {
        value.coords().map(Point::from_geo).collect()
    }
}

impl From<&geo_types::Polygon<f64>> for Polygon {
    fn from(value: &geo_types::Polygon<f64>) -> Self {
        let ring = |line: &geo_types::LineString<f64>| {
            Ring::new(line.coords().map(Point::from_geo).collect())
        };
        Polygon::new(
            ring(value.exterior()),
            value.interiors().iter().map(ring).collect(),
        )
    }
}
