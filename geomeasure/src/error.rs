//! Error types used by the crate.

use geomeasure_types::{GeomeasureTypesError, GeometryType};
use thiserror::Error;

/// Measurement error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    /// Unit token is not one of the supported units.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// The operation is not defined for the geometry type.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryType(GeometryType),
    /// Geometry is not of the requested type.
    #[error(transparent)]
    TypeMismatch(#[from] GeomeasureTypesError),
    /// Geometry does not have enough points for the operation.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Numeric argument is out of the allowed range.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
