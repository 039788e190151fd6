use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPoint(pub Vec<Point>);

impl MultiPoint {
    /// Iterates over the points.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Point> {
        self.0.iter()
    }

    /// Returns reference to the inner points.
    pub fn points(&self) -> &[Point] {
        &self.0
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}
