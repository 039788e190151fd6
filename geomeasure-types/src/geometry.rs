use serde::{Deserialize, Serialize};

use crate::error::GeomeasureTypesError;
use crate::geometry_type::GeometryType;
use crate::line_string::LineString;
use crate::multi_line_string::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::Polygon;

/// Any geometry.
///
/// Collections can contain any other geometries, including other collections.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geometry {
    /// Single point.
    Point(Point),
    /// Set of points.
    MultiPoint(MultiPoint),
    /// Open sequence of points.
    LineString(LineString),
    /// Set of line strings.
    MultiLineString(MultiLineString),
    /// Polygon with optional holes.
    Polygon(Polygon),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
    /// Heterogeneous set of geometries.
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Type of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    fn mismatch(&self, expected: GeometryType) -> GeomeasureTypesError {
        GeomeasureTypesError::TypeMismatch {
            expected,
            found: self.geometry_type(),
        }
    }
}

macro_rules! narrowing {
    ($variant:ident, $ty:ty, $as_fn:ident) => {
        impl Geometry {
            #[doc = concat!("Returns the inner value if the geometry is a `", stringify!($variant), "`.")]
            pub fn $as_fn(&self) -> Result<&$ty, GeomeasureTypesError> {
                match self {
                    Geometry::$variant(v) => Ok(v),
                    other => Err(other.mismatch(GeometryType::$variant)),
                }
            }
        }

        impl From<$ty> for Geometry {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }

        impl TryFrom<Geometry> for $ty {
            type Error = GeomeasureTypesError;

            fn try_from(value: Geometry) -> Result<Self, Self::Error> {
                match value {
                    Geometry::$variant(v) => Ok(v),
                    other => Err(other.mismatch(GeometryType::$variant)),
                }
            }
        }
    };
}

narrowing!(Point, Point, as_point);
narrowing!(MultiPoint, MultiPoint, as_multi_point);
narrowing!(LineString, LineString, as_line_string);
narrowing!(MultiLineString, MultiLineString, as_multi_line_string);
narrowing!(Polygon, Polygon, as_polygon);
narrowing!(MultiPolygon, MultiPolygon, as_multi_polygon);
narrowing!(GeometryCollection, Vec<Geometry>, as_geometry_collection);
