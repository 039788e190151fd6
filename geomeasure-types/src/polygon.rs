use serde::{Deserialize, Serialize};

use crate::line_string::Ring;

/// Polygon geometry. Polygon consists of one outer ring, and zero or more holes.
///
/// Holes are assumed to lie inside the outer ring. This is not validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    /// Outer boundary.
    pub outer: Ring,
    /// Holes.
    pub holes: Vec<Ring>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Self { outer, holes }
    }

    /// Creates a polygon from a list of rings, the first of which is the outer one.
    ///
    /// Returns `None` if the list is empty.
    pub fn from_rings(rings: Vec<Ring>) -> Option<Self> {
        let mut rings = rings.into_iter();
        let outer = rings.next()?;
        Some(Self {
            outer,
            holes: rings.collect(),
        })
    }

    /// Outer ring of the polygon.
    pub fn outer_ring(&self) -> &Ring {
        &self.outer
    }

    /// Iterates over the holes.
    pub fn holes(&self) -> impl Iterator<Item = &'_ Ring> {
        self.holes.iter()
    }

    /// Iterates over all rings of the polygon starting with the outer one.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ Ring> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }
}

impl From<Ring> for Polygon {
    fn from(value: Ring) -> Self {
        Self {
            outer: value,
            holes: vec![],
        }
    }
}
