//! Bounding boxes of geometries and features, and features built from bounding boxes.

use geomeasure_types::{
    BBox, Feature, FeatureCollection, Geometry, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Properties, Ring,
};

use crate::error::MeasureError;

/// Geometries that have a bounding box.
///
/// Longitudes and latitudes are bounded independently, so a geometry crossing the antimeridian gets a box that
/// spans almost the whole globe.
pub trait BoundingBox {
    /// Bounding box of the geometry. Fails if the geometry has no coordinates at all.
    fn bbox(&self) -> Result<BBox, MeasureError> {
        self.bounding_box().ok_or_else(|| {
            MeasureError::InvalidGeometry(
                "cannot compute a bounding box without coordinates".into(),
            )
        })
    }

    /// Bounding box of the geometry, or `None` if there are no coordinates.
    fn bounding_box(&self) -> Option<BBox>;
}

impl BoundingBox for Point {
    fn bounding_box(&self) -> Option<BBox> {
        Some(BBox::from_point(self))
    }
}

impl BoundingBox for MultiPoint {
    fn bounding_box(&self) -> Option<BBox> {
        BBox::from_points(self.iter_points())
    }
}

impl BoundingBox for LineString {
    fn bounding_box(&self) -> Option<BBox> {
        BBox::from_points(self.iter_points())
    }
}

impl BoundingBox for Ring {
    fn bounding_box(&self) -> Option<BBox> {
        BBox::from_points(self.iter_points())
    }
}

impl BoundingBox for MultiLineString {
    fn bounding_box(&self) -> Option<BBox> {
        BBox::merge_all(self.line_strings().filter_map(BoundingBox::bounding_box))
    }
}

impl BoundingBox for Polygon {
    fn bounding_box(&self) -> Option<BBox> {
        BBox::merge_all(self.iter_rings().filter_map(BoundingBox::bounding_box))
    }
}

impl BoundingBox for MultiPolygon {
    fn bounding_box(&self) -> Option<BBox> {
        BBox::merge_all(self.polygons().filter_map(BoundingBox::bounding_box))
    }
}

impl BoundingBox for Geometry {
    fn bounding_box(&self) -> Option<BBox> {
        match self {
            Geometry::Point(v) => v.bounding_box(),
            Geometry::MultiPoint(v) => v.bounding_box(),
            Geometry::LineString(v) => v.bounding_box(),
            Geometry::MultiLineString(v) => v.bounding_box(),
            Geometry::Polygon(v) => v.bounding_box(),
            Geometry::MultiPolygon(v) => v.bounding_box(),
            Geometry::GeometryCollection(members) => {
                BBox::merge_all(members.iter().filter_map(BoundingBox::bounding_box))
            }
        }
    }
}

impl BoundingBox for Feature {
    fn bounding_box(&self) -> Option<BBox> {
        self.geometry.bounding_box()
    }
}

impl BoundingBox for FeatureCollection {
    fn bounding_box(&self) -> Option<BBox> {
        BBox::merge_all(self.iter().filter_map(BoundingBox::bounding_box))
    }
}

/// Polygon feature covering the bounding box.
///
/// The outer ring starts at the south-west corner and goes through the north-west, north-east and south-east
/// corners back to the start.
pub fn bbox_polygon(bbox: &BBox, id: Option<String>) -> Feature {
    Feature::new(Polygon::from(bbox.into_ring())).with_id(id)
}

fn center_of(bbox: BBox, properties: Option<Properties>, id: Option<String>) -> Feature {
    Feature::new(bbox.center())
        .with_properties(properties)
        .with_id(id)
        .with_bbox(Some(bbox))
}

/// Point feature at the center of the bounding box of the feature.
///
/// The returned feature gets the given properties and id, and the bounding box of the input feature.
pub fn center_feature(
    feature: &Feature,
    properties: Option<Properties>,
    id: Option<String>,
) -> Result<Feature, MeasureError> {
    Ok(center_of(feature.bbox()?, properties, id))
}

/// Point feature at the center of the bounding box of all the features of the collection.
///
/// See [`center_feature`].
pub fn center_feature_collection(
    collection: &FeatureCollection,
    properties: Option<Properties>,
    id: Option<String>,
) -> Result<Feature, MeasureError> {
    Ok(center_of(collection.bbox()?, properties, id))
}
