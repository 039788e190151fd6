//! Length of geometries and interpolation along a path.

use geomeasure_types::{
    Feature, FeatureCollection, Geometry, LineString, MultiLineString, MultiPolygon, Point, Polygon,
    Ring, Segment,
};

use crate::error::MeasureError;
use crate::geodesy::{destination, point_bearing, point_distance};
use crate::units::Unit;

/// Geometries that have a length.
///
/// Lengths of collections are the sums of the lengths of their members, in the order they are stored. Points
/// do not have a length: asking for the length of a point or a multi point fails, but points inside a geometry
/// collection or a feature collection contribute zero.
pub trait Length {
    /// Length of the geometry in the given unit.
    fn length(&self, unit: Unit) -> Result<f64, MeasureError>;
}

fn segments_length<'a>(segments: impl Iterator<Item = Segment<'a, Point>>, unit: Unit) -> f64 {
    segments
        .map(|segment| point_distance(segment.start(), segment.end(), unit))
        .sum()
}

fn polygon_length(polygon: &Polygon, unit: Unit) -> f64 {
    polygon
        .iter_rings()
        .map(|ring| segments_length(ring.iter_segments(), unit))
        .sum()
}

fn multi_line_length(lines: &MultiLineString, unit: Unit) -> f64 {
    lines
        .line_strings()
        .map(|line| segments_length(line.iter_segments(), unit))
        .sum()
}

fn member_length(geometry: &Geometry, unit: Unit) -> f64 {
    match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => 0.0,
        Geometry::LineString(v) => segments_length(v.iter_segments(), unit),
        Geometry::MultiLineString(v) => multi_line_length(v, unit),
        Geometry::Polygon(v) => polygon_length(v, unit),
        Geometry::MultiPolygon(v) => v
            .polygons()
            .map(|polygon| polygon_length(polygon, unit))
            .sum(),
        Geometry::GeometryCollection(members) => members
            .iter()
            .map(|member| member_length(member, unit))
            .sum(),
    }
}

impl Length for LineString {
    fn length(&self, unit: Unit) -> Result<f64, MeasureError> {
        Ok(segments_length(self.iter_segments(), unit))
    }
}

impl Length for Ring {
    fn length(&self, unit: Unit) -> Result<f64, MeasureError> {
        Ok(segments_length(self.iter_segments(), unit))
    }
}

impl Length for MultiLineString {
    fn length(&self, unit: Unit) -> Result<f64, MeasureError> {
        Ok(multi_line_length(self, unit))
    }
}

impl Length for Polygon {
    fn length(&self, unit: Unit) -> Result<f64, MeasureError> {
        Ok(polygon_length(self, unit))
    }
}

impl Length for MultiPolygon {
    fn length(&self, unit: Unit) -> Result<f64, MeasureError> {
        Ok(self.polygons().map(|polygon| polygon_length(polygon, unit)).sum())
    }
}

impl Length for Geometry {
    fn length(&self, unit: Unit) -> Result<f64, MeasureError> {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => {
                Err(MeasureError::UnsupportedGeometryType(self.geometry_type()))
            }
            _ => Ok(member_length(self, unit)),
        }
    }
}

impl Length for Feature {
    fn length(&self, unit: Unit) -> Result<f64, MeasureError> {
        Ok(member_length(&self.geometry, unit))
    }
}

impl Length for FeatureCollection {
    fn length(&self, unit: Unit) -> Result<f64, MeasureError> {
        Ok(self.iter().map(|feature| member_length(&feature.geometry, unit)).sum())
    }
}

/// Point at the given distance along the line, measured from its first point.
///
/// Distances that are zero or negative give the first point of the line, distances longer than the line give its
/// last point. A distance that ends exactly at a vertex gives that vertex.
pub fn along(line: &LineString, distance: f64, unit: Unit) -> Result<Point, MeasureError> {
    let (Some(first), Some(last)) = (line.first(), line.last()) else {
        return Err(MeasureError::InvalidGeometry(
            "cannot interpolate along an empty line string".into(),
        ));
    };

    if distance <= 0.0 {
        log::trace!("Distance {distance} is not positive, returning the first point of the line");
        return Ok(*first);
    }

    let mut travelled = 0.0;
    for segment in line.iter_segments() {
        let (start, end) = (segment.start(), segment.end());
        let segment_length = point_distance(start, end, unit);

        let reached = travelled + segment_length;
        if reached == distance {
            return Ok(*end);
        }
        if reached > distance {
            let overshot = distance - travelled;
            return Ok(destination(start, overshot, point_bearing(start, end), unit));
        }

        travelled = reached;
    }

    log::trace!(
        "Distance {distance} is longer than the line ({travelled}), returning the last point"
    );
    Ok(*last)
}
