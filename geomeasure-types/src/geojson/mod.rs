//! Conversions from the values of the [`geojson`] crate.
//!
//! Only already parsed values are converted. Positions with more than 2 dimensions are accepted, extra dimensions
//! are dropped.

use geojson::feature::Id;
use geojson::{LineStringType, PolygonType, Position, Value};

use crate::bbox::BBox;
use crate::error::GeomeasureTypesError;
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::Geometry;
use crate::line_string::{LineString, Ring};
use crate::multi_line_string::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::Polygon;

mod point;

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = GeomeasureTypesError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        convert_value(&value.value)
    }
}

impl TryFrom<geojson::Geometry> for Geometry {
    type Error = GeomeasureTypesError;

    fn try_from(value: geojson::Geometry) -> Result<Self, Self::Error> {
        convert_value(&value.value)
    }
}

impl TryFrom<&geojson::Feature> for Feature {
    type Error = GeomeasureTypesError;

    fn try_from(value: &geojson::Feature) -> Result<Self, Self::Error> {
        let Some(geometry) = &value.geometry else {
            return Err(GeomeasureTypesError::Conversion(
                "feature has no geometry".to_string(),
            ));
        };

        Ok(Feature {
            geometry: Geometry::try_from(geometry)?,
            properties: value.properties.clone(),
            id: value.id.as_ref().map(|id| match id {
                Id::String(v) => v.clone(),
                Id::Number(v) => v.to_string(),
            }),
            bbox: value.bbox.as_deref().map(convert_bbox).transpose()?,
        })
    }
}

impl TryFrom<geojson::Feature> for Feature {
    type Error = GeomeasureTypesError;

    fn try_from(value: geojson::Feature) -> Result<Self, Self::Error> {
        Feature::try_from(&value)
    }
}

impl TryFrom<&geojson::FeatureCollection> for FeatureCollection {
    type Error = GeomeasureTypesError;

    fn try_from(value: &geojson::FeatureCollection) -> Result<Self, Self::Error> {
        value
            .features
            .iter()
            .map(Feature::try_from)
            .collect::<Result<FeatureCollection, _>>()
    }
}

impl TryFrom<geojson::FeatureCollection> for FeatureCollection {
    type Error = GeomeasureTypesError;

    fn try_from(value: geojson::FeatureCollection) -> Result<Self, Self::Error> {
        FeatureCollection::try_from(&value)
    }
}

fn convert_value(value: &Value) -> Result<Geometry, GeomeasureTypesError> {
    Ok(match value {
        Value::Point(p) => Geometry::Point(Point::try_from(p)?),
        Value::MultiPoint(points) => Geometry::MultiPoint(MultiPoint(convert_points(points)?)),
        Value::LineString(points) => Geometry::LineString(convert_line_string(points)?),
        Value::MultiLineString(lines) => Geometry::MultiLineString(MultiLineString::from(
            lines
                .iter()
                .map(convert_line_string)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        Value::Polygon(polygon) => Geometry::Polygon(convert_polygon(polygon)?),
        Value::MultiPolygon(mp) => Geometry::MultiPolygon(MultiPolygon::from(
            mp.iter()
                .map(convert_polygon)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        Value::GeometryCollection(geometries) => Geometry::GeometryCollection(
            geometries
                .iter()
                .map(Geometry::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        ),
    })
}

fn convert_points(points: &[Position]) -> Result<Vec<Point>, GeomeasureTypesError> {
    points.iter().map(Point::try_from).collect()
}

fn convert_line_string(line_string: &LineStringType) -> Result<LineString, GeomeasureTypesError> {
    Ok(LineString::new(convert_points(line_string)?))
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon, GeomeasureTypesError> {
    let rings = polygon
        .iter()
        .map(|ring| convert_points(ring).map(Ring::new))
        .collect::<Result<Vec<_>, _>>()?;
    Polygon::from_rings(rings)
        .ok_or_else(|| GeomeasureTypesError::Conversion("polygon has no rings".to_string()))
}

fn convert_bbox(bbox: &[f64]) -> Result<BBox, GeomeasureTypesError> {
    match *bbox {
        [west, south, east, north] => Ok(BBox::new(west, south, east, north)),
        [west, south, _, east, north, _] => Ok(BBox::new(west, south, east, north)),
        _ => Err(GeomeasureTypesError::Conversion(format!(
            "bbox must contain 4 or 6 numbers, got {}",
            bbox.len()
        ))),
    }
}
