//! Sequences of points: open [`LineString`]s and closed [`Ring`]s.
//!
//! Both follow the OGC/GeoJSON convention for closure: a ring is closed when its first and last points are
//! exactly the same, so the closing point is stored explicitly. This is different from types that keep the
//! closing segment implicit, and it means that iterating over the points of a ring yields the first point twice.
//!
//! Neither type validates its content. A line string is expected to contain at least 2 points and a ring at
//! least 4 (3 distinct points and the closing one), but degenerate values can be constructed and measurement
//! functions deal with them explicitly.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A straight line segment between two consecutive points of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a, P>(pub &'a P, pub &'a P);

impl<'a, P> Segment<'a, P> {
    /// Start point of the segment.
    pub fn start(&self) -> &'a P {
        self.0
    }

    /// End point of the segment.
    pub fn end(&self) -> &'a P {
        self.1
    }
}

fn segments(points: &[Point]) -> impl Iterator<Item = Segment<'_, Point>> {
    points.windows(2).map(|pair| Segment(&pair[0], &pair[1]))
}

/// Open sequence of points.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Creates a new line string.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the line string.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points of the line string.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Point> {
        self.points.iter()
    }

    /// Iterates over segments between consecutive points.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Point>> {
        segments(&self.points)
    }

    /// Returns the inner vector of points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Deref for LineString {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl From<Vec<Point>> for LineString {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Closed boundary of a polygon. The last point is expected to repeat the first one.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    /// Creates a new ring. The points are taken as is, the closing point is not added.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Whether the first and the last points of the ring are the same.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Points of the ring including the closing one.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points of the ring including the closing one.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Point> {
        self.points.iter()
    }

    /// Iterates over segments of the ring. For a closed ring the last segment ends at the first point.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Point>> {
        segments(&self.points)
    }

    /// Returns the inner vector of points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Deref for Ring {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl From<Vec<Point>> for Ring {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl From<Ring> for LineString {
    fn from(value: Ring) -> Self {
        Self {
            points: value.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_segments() {
        let line = LineString::new(vec![Point::new(0.0, 0.0)]);
        assert_eq!(line.iter_segments().count(), 0);

        let line = LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(line.iter_segments().count(), 1);
        assert_eq!(
            line.iter_segments().last().unwrap(),
            Segment(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0))
        );

        let ring = Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 0.0),
        ]);
        assert_eq!(ring.iter_segments().count(), 3);
        assert_eq!(
            ring.iter_segments().last().unwrap(),
            Segment(&Point::new(1.0, 0.0), &Point::new(0.0, 0.0))
        );
    }

    #[test]
    fn closure() {
        assert!(!Ring::default().is_closed());
        assert!(!Ring::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).is_closed());
        assert!(Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0)
        ])
        .is_closed());
    }

    #[test]
    fn deserialize_from_positions() {
        let json = r#"[{"lng":1.0,"lat":2.0},{"lng":3.0,"lat":4.0}]"#;
        let line: LineString = serde_json::from_str(json).expect("invalid json");
        assert_eq!(line.len(), 2);
        assert_eq!(line[1], Point::new(3.0, 4.0));
    }
}
