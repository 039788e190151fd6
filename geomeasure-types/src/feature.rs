//! Features are geometries with attached user data.

use serde::{Deserialize, Serialize};

use crate::bbox::BBox;
use crate::error::GeomeasureTypesError;
use crate::geometry::Geometry;
use crate::line_string::LineString;
use crate::multi_line_string::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::Polygon;

/// Property bag of a feature. Values are arbitrary JSON values.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// A geometry with properties, an optional identifier and an optional cached bounding box.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    /// Geometry of the feature.
    pub geometry: Geometry,
    /// Properties of the feature.
    pub properties: Option<Properties>,
    /// Identifier of the feature.
    pub id: Option<String>,
    /// Bounding box of the feature, if it was computed or provided with the data.
    pub bbox: Option<BBox>,
}

impl Feature {
    /// Creates a new feature without properties, id and bounding box.
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: geometry.into(),
            properties: None,
            id: None,
            bbox: None,
        }
    }

    /// Sets the properties of the feature.
    pub fn with_properties(mut self, properties: Option<Properties>) -> Self {
        self.properties = properties;
        self
    }

    /// Sets the identifier of the feature.
    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    /// Sets the bounding box of the feature.
    pub fn with_bbox(mut self, bbox: Option<BBox>) -> Self {
        self.bbox = bbox;
        self
    }

    /// Returns the value of the property with the given name.
    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref()?.get(name)
    }

    /// Narrows the geometry of the feature to a point.
    pub fn to_point(&self) -> Result<&Point, GeomeasureTypesError> {
        self.geometry.as_point()
    }

    /// Narrows the geometry of the feature to a multi point.
    pub fn to_multi_point(&self) -> Result<&MultiPoint, GeomeasureTypesError> {
        self.geometry.as_multi_point()
    }

    /// Narrows the geometry of the feature to a line string.
    pub fn to_line_string(&self) -> Result<&LineString, GeomeasureTypesError> {
        self.geometry.as_line_string()
    }

    /// Narrows the geometry of the feature to a multi line string.
    pub fn to_multi_line_string(&self) -> Result<&MultiLineString, GeomeasureTypesError> {
        self.geometry.as_multi_line_string()
    }

    /// Narrows the geometry of the feature to a polygon.
    pub fn to_polygon(&self) -> Result<&Polygon, GeomeasureTypesError> {
        self.geometry.as_polygon()
    }

    /// Narrows the geometry of the feature to a multi polygon.
    pub fn to_multi_polygon(&self) -> Result<&MultiPolygon, GeomeasureTypesError> {
        self.geometry.as_multi_polygon()
    }
}

/// Ordered set of features.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FeatureCollection {
    /// Features of the collection.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a new collection.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Iterates over the features.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}
