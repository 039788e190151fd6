use geojson::Position;

use crate::error::GeomeasureTypesError;
use crate::point::Point;

impl TryFrom<&Position> for Point {
    type Error = GeomeasureTypesError;

    fn try_from(value: &Position) -> Result<Self, Self::Error> {
        match value.as_slice() {
            [lng, lat, ..] => Ok(Point::new(*lng, *lat)),
            _ => Err(GeomeasureTypesError::Conversion(
                "point must contain at least 2 dimensions".to_string(),
            )),
        }
    }
}

impl From<Point> for Position {
    fn from(value: Point) -> Self {
        vec![value.lng, value.lat]
    }
}
