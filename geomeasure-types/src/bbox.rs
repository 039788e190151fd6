use num_traits::{Float, Num};
use serde::{Deserialize, Serialize};

use crate::line_string::Ring;
use crate::point::{GeoPoint, Point};

/// Axis-aligned bounding box in geographic coordinates.
///
/// The array form of the box is `[west, south, east, north]`, i.e. `[min_lng, min_lat, max_lng, max_lat]`, as used
/// by GeoJSON `bbox` members.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BBox<N: Num + Copy + PartialOrd = f64> {
    /// Minimum longitude.
    pub west: N,
    /// Minimum latitude.
    pub south: N,
    /// Maximum longitude.
    pub east: N,
    /// Maximum latitude.
    pub north: N,
}

impl<N: Num + Copy + PartialOrd> BBox<N> {
    /// Creates a new bounding box.
    pub fn new(west: N, south: N, east: N, north: N) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Creates a bounding box from `[west, south, east, north]`.
    pub fn from_array([west, south, east, north]: [N; 4]) -> Self {
        Self::new(west, south, east, north)
    }

    /// Returns `[west, south, east, north]`.
    pub fn to_array(&self) -> [N; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// Bounding box containing a single coordinate pair.
    pub fn from_coords(lng: N, lat: N) -> Self {
        Self::new(lng, lat, lng, lat)
    }

    /// Extends the box to contain the given coordinate pair.
    pub fn expand(&mut self, lng: N, lat: N) {
        if self.west > lng {
            self.west = lng;
        }
        if self.south > lat {
            self.south = lat;
        }
        if self.east < lng {
            self.east = lng;
        }
        if self.north < lat {
            self.north = lat;
        }
    }

    /// Smallest box containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            west: if self.west < other.west {
                self.west
            } else {
                other.west
            },
            south: if self.south < other.south {
                self.south
            } else {
                other.south
            },
            east: if self.east > other.east {
                self.east
            } else {
                other.east
            },
            north: if self.north > other.north {
                self.north
            } else {
                other.north
            },
        }
    }

    /// Merges all the boxes of the iterator. Returns `None` if the iterator is empty.
    pub fn merge_all(boxes: impl IntoIterator<Item = Self>) -> Option<Self> {
        let mut iter = boxes.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, |acc, next| acc.merge(next)))
    }

    /// Width of the box in degrees of longitude.
    pub fn width(&self) -> N {
        self.east - self.west
    }

    /// Height of the box in degrees of latitude.
    pub fn height(&self) -> N {
        self.north - self.south
    }

    /// Whether the coordinate pair is inside the box or on its border.
    pub fn contains_coords(&self, lng: N, lat: N) -> bool {
        self.west <= lng && self.east >= lng && self.south <= lat && self.north >= lat
    }
}

impl<N: Float> BBox<N> {
    /// Coordinates `(lng, lat)` of the center of the box.
    pub fn center_coords(&self) -> (N, N) {
        let two = N::one() + N::one();
        ((self.west + self.east) / two, (self.south + self.north) / two)
    }
}

impl BBox<f64> {
    /// Bounding box of a single point.
    pub fn from_point(p: &impl GeoPoint) -> Self {
        Self::from_coords(p.lon(), p.lat())
    }

    /// Bounding box of a set of points. Returns `None` if there are no points.
    pub fn from_points<'a, P: GeoPoint + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut bbox = Self::from_point(first);
        for p in points {
            bbox.expand(p.lon(), p.lat());
        }

        Some(bbox)
    }

    /// Whether the point is inside the box or on its border.
    pub fn contains(&self, point: &impl GeoPoint) -> bool {
        self.contains_coords(point.lon(), point.lat())
    }

    /// Center of the box.
    pub fn center(&self) -> Point {
        let (lng, lat) = self.center_coords();
        Point::new(lng, lat)
    }

    /// Corners of the box starting at the south-west one and going clockwise: south-west, north-west, north-east,
    /// south-east.
    pub fn into_quadrangle(self) -> [Point; 4] {
        [
            Point::new(self.west, self.south),
            Point::new(self.west, self.north),
            Point::new(self.east, self.north),
            Point::new(self.east, self.south),
        ]
    }

    /// Closed ring tracing the corners of the box (see [`BBox::into_quadrangle`]).
    pub fn into_ring(self) -> Ring {
        let corners = self.into_quadrangle();
        let mut points = Vec::from(corners);
        points.push(corners[0]);
        Ring::new(points)
    }
}

impl<N: Num + Copy + PartialOrd> From<[N; 4]> for BBox<N> {
    fn from(value: [N; 4]) -> Self {
        Self::from_array(value)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn from_points() {
        let points = [
            Point::new(102.0, -10.0),
            Point::new(103.0, 1.0),
            Point::new(104.0, 0.0),
            Point::new(130.0, 4.0),
        ];
        let bbox = BBox::from_points(points.iter()).unwrap();
        assert_eq!(bbox.to_array(), [102.0, -10.0, 130.0, 4.0]);
        assert!(BBox::from_points(std::iter::empty::<&Point>()).is_none());
    }

    #[test]
    fn merge() {
        let a = BBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BBox::new(-1.0, 0.5, 0.5, 3.0);
        assert_eq!(a.merge(b), BBox::new(-1.0, 0.0, 1.0, 3.0));
        assert_eq!(BBox::merge_all([a, b]), Some(BBox::new(-1.0, 0.0, 1.0, 3.0)));
        assert_eq!(BBox::<f64>::merge_all([]), None);
    }

    #[test]
    fn center() {
        let bbox = BBox::new(113.0, -39.0, 154.0, -15.0);
        assert_eq!(bbox.center(), Point::new(133.5, -27.0));
        assert_eq!(bbox.width(), 41.0);
        assert_eq!(bbox.height(), 24.0);
        assert!(bbox.contains(&Point::new(133.5, -27.0)));
        assert!(!bbox.contains(&Point::new(0.0, 0.0)));

        let bbox = BBox::new(-0.3, 0.1, 0.9, 0.7);
        let center = bbox.center();
        assert_abs_diff_eq!(center.lng, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(center.lat, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(bbox.width(), 1.2, epsilon = 1e-12);
    }

    #[test]
    fn ring_winding() {
        let ring = BBox::new(102.0, -10.0, 130.0, 4.0).into_ring();
        assert!(ring.is_closed());
        assert_eq!(
            ring.points(),
            &[
                Point::new(102.0, -10.0),
                Point::new(102.0, 4.0),
                Point::new(130.0, 4.0),
                Point::new(130.0, -10.0),
                Point::new(102.0, -10.0),
            ]
        );
    }
}
