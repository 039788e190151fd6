//! Geomeasure measures geographic geometries on a spherical model of the Earth: distances, bearings, lengths,
//! areas and bounding boxes of points, lines, polygons and features.
//!
//! # Quick start
//!
//! ```no_run
//! use geomeasure::{lnglat, point_distance, Area, BoundingBox, Polygon, Ring, Unit};
//!
//! let sofia = lnglat!(23.32, 42.70);
//! let plovdiv = lnglat!(24.75, 42.14);
//! println!("{} km", point_distance(&sofia, &plovdiv, Unit::Kilometers));
//!
//! let square = Polygon::from(Ring::new(vec![
//!     lnglat!(0.0, 0.0),
//!     lnglat!(0.0, 1.0),
//!     lnglat!(1.0, 1.0),
//!     lnglat!(1.0, 0.0),
//!     lnglat!(0.0, 0.0),
//! ]));
//! println!("{} m2", square.area().unwrap());
//! println!("{:?}", square.bbox().unwrap().to_array());
//! ```
//!
//! # Model
//!
//! The Earth is a sphere with radius [`EARTH_RADIUS`](units::EARTH_RADIUS). All coordinates are longitude and
//! latitude in decimal degrees, and all the computations are great-circle (haversine) formulas. There is no
//! ellipsoidal correction, so the results differ from the geodesic distances on WGS84 by up to 0.5%.
//!
//! Geometry types come from the [`geomeasure_types`] crate and are re-exported here. Measurements are provided as
//! traits implemented for every geometry type where the measure makes sense:
//!
//! * [`Length`] for lines, polygon boundaries and their collections,
//! * [`Area`] for polygons and their collections,
//! * [`BoundingBox`] for everything.
//!
//! Point operations ([`distance`](geodesy::distance), [`bearing`](geodesy::bearing),
//! [`destination`](geodesy::destination), [`midpoint`](geodesy::midpoint)) are free functions, also available as
//! methods through the [`GeodesicPoint`] trait.
//!
//! Lengths are returned in a [`Unit`] chosen by the caller, kilometers by default. Areas are returned in square
//! meters and can be converted with [`Area::area_in`].

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod angle;
pub mod area;
pub mod bbox;
pub mod error;
pub mod geodesy;
pub mod length;
pub mod nearest;
pub mod units;

#[cfg(test)]
mod tests;

pub use area::{ring_area, Area};
pub use bbox::{bbox_polygon, center_feature, center_feature_collection, BoundingBox};
pub use error::MeasureError;
pub use geodesy::{
    bearing, destination, distance, midpoint, point_bearing, point_distance, GeodesicPoint,
};
pub use geomeasure_types;
pub use geomeasure_types::*;
pub use length::{along, Length};
pub use nearest::nearest_point;
pub use units::{AreaUnit, Unit};
