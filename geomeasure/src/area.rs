//! Area of polygonal geometries on a sphere.

use std::f64::consts::PI;

use geomeasure_types::{Feature, FeatureCollection, Geometry, MultiPolygon, Point, Polygon, Ring};

use crate::error::MeasureError;
use crate::units::{AreaUnit, EARTH_RADIUS};

/// Geometries that enclose an area.
///
/// All areas are computed in square meters. Holes are always subtracted from the outer ring, whatever the
/// winding order of the rings is.
pub trait Area {
    /// Area in square meters.
    fn area(&self) -> Result<f64, MeasureError>;

    /// Area in the given unit.
    fn area_in(&self, unit: AreaUnit) -> Result<f64, MeasureError> {
        Ok(self.area()? * unit.factor())
    }
}

fn rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Area of the surface enclosed by a ring, in square meters.
///
/// The points must include the closing point. Rings with less than 3 points have zero area.
pub fn ring_area(points: &[Point]) -> f64 {
    let count = points.len();
    if count <= 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..count {
        let (lower, middle, upper) = if i == count - 2 {
            (count - 2, count - 1, 0)
        } else if i == count - 1 {
            (count - 1, 0, 1)
        } else {
            (i, i + 1, i + 2)
        };

        total += (rad(points[upper].lng) - rad(points[lower].lng)) * rad(points[middle].lat).sin();
    }

    (total * EARTH_RADIUS * EARTH_RADIUS / 2.0).abs()
}

fn polygon_area(polygon: &Polygon) -> f64 {
    let holes: f64 = polygon.holes().map(|hole| ring_area(hole.points())).sum();
    (ring_area(polygon.outer_ring().points()) - holes).max(0.0)
}

fn member_area(geometry: &Geometry) -> f64 {
    match geometry {
        Geometry::Polygon(v) => polygon_area(v),
        Geometry::MultiPolygon(v) => v.polygons().map(polygon_area).sum(),
        Geometry::GeometryCollection(members) => members.iter().map(member_area).sum(),
        other => {
            log::trace!("{} has no area, counting it as zero", other.geometry_type());
            0.0
        }
    }
}

impl Area for Ring {
    fn area(&self) -> Result<f64, MeasureError> {
        Ok(ring_area(self.points()))
    }
}

impl Area for Polygon {
    fn area(&self) -> Result<f64, MeasureError> {
        Ok(polygon_area(self))
    }
}

impl Area for MultiPolygon {
    fn area(&self) -> Result<f64, MeasureError> {
        Ok(self.polygons().map(polygon_area).sum())
    }
}

impl Area for Geometry {
    fn area(&self) -> Result<f64, MeasureError> {
        match self {
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) | Geometry::GeometryCollection(_) => {
                Ok(member_area(self))
            }
            other => Err(MeasureError::UnsupportedGeometryType(other.geometry_type())),
        }
    }
}

impl Area for Feature {
    fn area(&self) -> Result<f64, MeasureError> {
        Ok(member_area(&self.geometry))
    }
}

impl Area for FeatureCollection {
    fn area(&self) -> Result<f64, MeasureError> {
        Ok(self.iter().map(|feature| member_area(&feature.geometry)).sum())
    }
}
