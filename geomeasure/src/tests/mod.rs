use approx::{assert_abs_diff_eq, assert_relative_eq};
use assert_matches::assert_matches;
use geojson::GeoJson;
use geomeasure_types::lnglat;
use serde_json::json;

use crate::units::EARTH_RADIUS;
use crate::*;

/// Area of the spherical rectangle bounded by two meridians and two parallels, in square meters.
fn spherical_rectangle_area(west: f64, south: f64, east: f64, north: f64) -> f64 {
    EARTH_RADIUS
        * EARTH_RADIUS
        * (east - west).to_radians()
        * (north.to_radians().sin() - south.to_radians().sin())
}

/// Great-circle distance between two points of the same parallel, in kilometers.
fn parallel_chord_length(lat: f64, d_lng: f64) -> f64 {
    let half_chord = lat.to_radians().cos() * (d_lng.to_radians() / 2.0).sin();
    2.0 * Unit::Kilometers.factor() * half_chord.asin()
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parse(text: &str) -> GeoJson {
    text.parse().expect("invalid geojson")
}

fn load_feature(text: &str) -> Feature {
    init_logger();
    match parse(text) {
        GeoJson::Feature(feature) => Feature::try_from(feature).expect("unsupported feature"),
        other => panic!("expected a feature, got {other:?}"),
    }
}

fn load_geometry(text: &str) -> Geometry {
    init_logger();
    match parse(text) {
        GeoJson::Geometry(geometry) => Geometry::try_from(geometry).expect("unsupported geometry"),
        other => panic!("expected a geometry, got {other:?}"),
    }
}

fn load_collection(text: &str) -> FeatureCollection {
    init_logger();
    match parse(text) {
        GeoJson::FeatureCollection(collection) => {
            FeatureCollection::try_from(collection).expect("unsupported feature collection")
        }
        other => panic!("expected a feature collection, got {other:?}"),
    }
}

const BBOX_POINT: &str = include_str!("../../test-data/bbox-point.geojson");
const BBOX_MULTI_POINT: &str = include_str!("../../test-data/bbox-multipoint.geojson");
const BBOX_LINE_STRING: &str = include_str!("../../test-data/bbox-linestring.geojson");
const BBOX_POLYGON: &str = include_str!("../../test-data/bbox-polygon.geojson");
const BBOX_MULTI_LINE_STRING: &str = include_str!("../../test-data/bbox-multilinestring.geojson");
const BBOX_MULTI_POLYGON: &str = include_str!("../../test-data/bbox-multipolygon.geojson");
const BBOX_GEOMETRY_MULTI_POLYGON: &str =
    include_str!("../../test-data/bbox-geometry-multipolygon.geojson");
const AREA_POLYGON: &str = include_str!("../../test-data/area-polygon.geojson");
const AREA_MULTI_POLYGON: &str = include_str!("../../test-data/area-multipolygon.geojson");
const AREA_FEATURE_COLLECTION: &str =
    include_str!("../../test-data/area-feature-collection.geojson");
const ALONG_DC_LINE: &str = include_str!("../../test-data/along-dc-line.geojson");
const LENGTH_MULTI_LINE_STRING: &str =
    include_str!("../../test-data/length-multilinestring.geojson");
const LENGTH_POLYGON: &str = include_str!("../../test-data/length-polygon.geojson");

#[test]
fn bbox_of_point() {
    let feature = load_feature(BBOX_POINT);
    let point = feature.to_point().unwrap();
    assert_eq!(point.bbox().unwrap().to_array(), [102.0, 0.5, 102.0, 0.5]);
}

#[test]
fn bbox_of_multi_point() {
    let feature = load_feature(BBOX_MULTI_POINT);
    let points = feature.to_multi_point().unwrap();
    assert_eq!(points.bbox().unwrap().to_array(), [102.0, -10.0, 130.0, 4.0]);
}

#[test]
fn bbox_of_line_string() {
    let feature = load_feature(BBOX_LINE_STRING);
    let line = feature.to_line_string().unwrap();
    assert_eq!(line.bbox().unwrap().to_array(), [102.0, -10.0, 130.0, 4.0]);
    assert_eq!(feature.bbox().unwrap().to_array(), [102.0, -10.0, 130.0, 4.0]);
}

#[test]
fn bbox_of_polygon() {
    let feature = load_feature(BBOX_POLYGON);
    let polygon = feature.to_polygon().unwrap();
    assert_eq!(polygon.bbox().unwrap().to_array(), [100.0, 0.0, 101.0, 1.0]);
}

#[test]
fn bbox_of_multi_line_string() {
    let feature = load_feature(BBOX_MULTI_LINE_STRING);
    let lines = feature.to_multi_line_string().unwrap();
    assert_eq!(lines.bbox().unwrap().to_array(), [100.0, 0.0, 103.0, 3.0]);
}

#[test]
fn bbox_of_multi_polygon() {
    let feature = load_feature(BBOX_MULTI_POLYGON);
    let polygons = feature.to_multi_polygon().unwrap();
    assert_eq!(polygons.bbox().unwrap().to_array(), [100.0, 0.0, 103.0, 3.0]);

    let geometry = load_geometry(BBOX_GEOMETRY_MULTI_POLYGON);
    let polygons = geometry.as_multi_polygon().unwrap();
    assert_eq!(polygons.bbox().unwrap().to_array(), [100.0, 0.0, 103.0, 3.0]);
}

#[test]
fn bbox_of_geometry_collection() {
    let collection = Geometry::GeometryCollection(
        [
            BBOX_POINT,
            BBOX_MULTI_POINT,
            BBOX_LINE_STRING,
            BBOX_MULTI_LINE_STRING,
            BBOX_POLYGON,
            BBOX_MULTI_POLYGON,
        ]
        .into_iter()
        .map(|text| load_feature(text).geometry)
        .collect(),
    );

    assert_eq!(collection.bbox().unwrap().to_array(), [100.0, -10.0, 130.0, 4.0]);
}

#[test]
fn polygon_from_line_string_bbox() {
    let feature = load_feature(BBOX_LINE_STRING);
    let bbox = feature.to_line_string().unwrap().bbox().unwrap();

    let polygon_feature = bbox_polygon(&bbox, None);
    assert_eq!(polygon_feature.id, None);

    let polygon = polygon_feature.to_polygon().unwrap();
    assert_eq!(polygon.outer.len(), 5);
    assert_eq!(polygon.outer[0], lnglat!(102.0, -10.0));
    assert_eq!(polygon.outer[1], lnglat!(102.0, 4.0));
    assert_eq!(polygon.outer[2], lnglat!(130.0, 4.0));
    assert_eq!(polygon.outer[3], lnglat!(130.0, -10.0));
    assert_eq!(polygon.outer[4], lnglat!(102.0, -10.0));
}

#[test]
fn length_of_multi_line_string() {
    let feature = load_feature(LENGTH_MULTI_LINE_STRING);
    let lines = feature.to_multi_line_string().unwrap();
    assert_relative_eq!(
        lines.length(Unit::default()).unwrap(),
        4.703841298351085,
        max_relative = 1e-12
    );
}

#[test]
fn length_of_polygon() {
    let feature = load_feature(LENGTH_POLYGON);
    let polygon = feature.to_polygon().unwrap();

    let meridians = 2.0 * Unit::Kilometers.factor() * 0.03_f64.to_radians();
    let parallels = parallel_chord_length(38.87, 0.03) + parallel_chord_length(38.9, 0.03);
    assert_relative_eq!(
        polygon.length(Unit::Kilometers).unwrap(),
        meridians + parallels,
        max_relative = 1e-9
    );
    assert_eq!(feature.length(Unit::default()), polygon.length(Unit::default()));
}

#[test]
fn area_of_polygon_feature() {
    let feature = load_feature(AREA_POLYGON);
    let area = feature.area().unwrap();
    assert_eq!(area.trunc(), 7_748_891_609_977.0);
    assert_eq!(feature.to_polygon().unwrap().area(), Ok(area));
    assert_eq!(feature.geometry.area(), Ok(area));
}

#[test]
fn area_of_multi_polygon_feature() {
    let feature = load_feature(AREA_MULTI_POLYGON);
    let area = feature.area().unwrap();
    let expected = spherical_rectangle_area(0.0, 0.0, 1.0, 1.0)
        + spherical_rectangle_area(10.0, 10.0, 11.0, 11.0);
    assert_relative_eq!(area, expected, max_relative = 1e-12);
    assert_eq!(feature.to_multi_polygon().unwrap().area(), Ok(area));
}

#[test]
fn area_of_feature_collection() {
    let collection = load_collection(AREA_FEATURE_COLLECTION);
    assert_eq!(collection.len(), 3);
    assert_eq!(collection.features[1].id.as_deref(), Some("2"));

    let area = collection.area().unwrap();
    let expected = spherical_rectangle_area(-1.5, 43.0, 3.0, 48.5)
        + spherical_rectangle_area(4.0, 45.0, 9.5, 51.0);
    assert_relative_eq!(area, expected, max_relative = 1e-12);

    let by_feature: f64 = collection.iter().map(|f| f.area().unwrap()).sum();
    assert_relative_eq!(area, by_feature, max_relative = 1e-12);
    assert_matches!(
        collection.features[2].geometry.area(),
        Err(MeasureError::UnsupportedGeometryType(GeometryType::LineString))
    );
}

#[test]
fn along_dc_line() {
    let feature = load_feature(ALONG_DC_LINE);
    let line = feature.to_line_string().unwrap();

    let expected = [
        (1.0, -77.02309665299582, 38.88344807469551),
        (1.2, -77.0208812014407, 38.88395897230003),
        (1.4, -77.02194839116532, 38.884609309232474),
        (1.6, -77.024079321297, 38.88530480412641),
        (1.8, -77.02529304010835, 38.88618557283108),
        (2.0, -77.02386550090648, 38.88759992522728),
    ];
    for (distance, lng, lat) in expected {
        let point = along(line, distance, Unit::default()).unwrap();
        assert_abs_diff_eq!(point.lng, lng, epsilon = 1e-9);
        assert_abs_diff_eq!(point.lat, lat, epsilon = 1e-9);
    }

    assert_eq!(along(line, 100.0, Unit::default()), Ok(line[line.len() - 1]));
    assert_eq!(along(line, 0.0, Unit::default()), Ok(line[0]));
}

#[test]
fn center_of_polygon_feature() {
    let feature = load_feature(AREA_POLYGON);

    let center = center_feature(&feature, None, None).unwrap();
    let expected = Feature::new(lnglat!(133.5, -27.0))
        .with_bbox(Some(BBox::new(113.0, -39.0, 154.0, -15.0)));
    assert_eq!(center, expected);

    let center = center_feature(&feature, None, Some("testId".into())).unwrap();
    assert_eq!(center.to_point(), Ok(&lnglat!(133.5, -27.0)));
    assert_eq!(center.id.as_deref(), Some("testId"));

    let mut properties = Properties::new();
    properties.insert("key".into(), json!("value"));
    let center = center_feature(&feature, Some(properties.clone()), None).unwrap();
    assert_eq!(center.to_point(), Ok(&lnglat!(133.5, -27.0)));
    assert_eq!(center.properties, Some(properties));
}

#[test]
fn center_of_feature_collection() {
    let collection = load_collection(AREA_FEATURE_COLLECTION);
    let center = center_feature_collection(&collection, None, None).unwrap();

    assert_eq!(center.to_point(), Ok(&lnglat!(4.0, 47.0)));
    assert_eq!(center.bbox, Some(BBox::new(-1.5, 43.0, 9.5, 51.0)));
}

#[test]
fn point_measures_of_fixture() {
    let feature = load_feature(ALONG_DC_LINE);
    let line = feature.to_line_string().unwrap();
    let first = line[0];
    let last = line[line.len() - 1];

    let middle = midpoint(&first, &last);
    assert_abs_diff_eq!(
        point_distance(&first, &middle, Unit::Meters),
        point_distance(&middle, &last, Unit::Meters),
        epsilon = 1e-6
    );
    assert_eq!(nearest_point(&middle, line.points()), line[3]);

    let back = destination(
        &first,
        point_distance(&first, &last, Unit::Miles),
        point_bearing(&first, &last),
        Unit::Miles,
    );
    assert_abs_diff_eq!(back.lng, last.lng, epsilon = 1e-9);
    assert_abs_diff_eq!(back.lat, last.lat, epsilon = 1e-9);
}
