//! Nearest point search.

use geomeasure_types::{GeoPoint, Point};

use crate::geodesy::point_distance;
use crate::units::Unit;

/// Point of the set that is closest to the reference point by great-circle distance.
///
/// If several points are at the same distance, the first of them is returned. If the set is empty, the reference
/// point itself is returned.
pub fn nearest_point(reference: &Point, points: &[Point]) -> Point {
    nearest_by(reference, points.iter()).copied().unwrap_or_else(|| {
        log::trace!("No candidates for the nearest point, returning the reference point");
        *reference
    })
}

/// Reference to the item of the iterator that is closest to the reference point, or `None` if the iterator is
/// empty.
pub fn nearest_by<'a, P: GeoPoint + 'a>(
    reference: &impl GeoPoint,
    points: impl IntoIterator<Item = &'a P>,
) -> Option<&'a P> {
    let mut nearest: Option<(&P, f64)> = None;
    for point in points {
        let distance = point_distance(reference, point, Unit::default());
        match nearest {
            Some((_, min)) if distance >= min => {}
            _ => nearest = Some((point, distance)),
        }
    }

    nearest.map(|(point, _)| point)
}
