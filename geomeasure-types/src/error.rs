//! Error type used by the crate.

use thiserror::Error;

use crate::geometry_type::GeometryType;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomeasureTypesError {
    /// A geometry was narrowed to a concrete type it does not have.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Requested geometry type.
        expected: GeometryType,
        /// Actual geometry type of the value.
        found: GeometryType,
    },
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
