//! Geometry and feature types used by the `geomeasure` crate.
//!
//! The types follow the GeoJSON model: coordinates are longitude and latitude in degrees, rings store their closing
//! point explicitly and a polygon is an outer ring with zero or more holes. All geometries are plain owned values,
//! any geometry can be wrapped into the [`Geometry`] enum and into a [`Feature`] with a property bag.
//!
//! Values of other geometry crates can be converted into these types with the `geojson` and `geo-types` features.

pub mod bbox;
pub mod error;
pub mod feature;
mod geometry;
pub mod geometry_type;
pub mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;

#[cfg(feature = "geo-types")]
mod geo_types;
#[cfg(feature = "geojson")]
mod geojson;

pub use bbox::BBox;
pub use error::GeomeasureTypesError;
pub use feature::{Feature, FeatureCollection, Properties};
pub use geometry::Geometry;
pub use geometry_type::GeometryType;
pub use line_string::{LineString, Ring, Segment};
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::{GeoPoint, NewGeoPoint, Point};
pub use polygon::Polygon;
