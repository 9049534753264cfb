//! Error handling for Fingerkit geometry
//!
//! Errors raised when an edge handed over by the geometry provider cannot be
//! laid out. All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents malformed input geometry. A zero-length edge is valid input and
/// never produces one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A point has a NaN or infinite coordinate
    #[error("Non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// The x coordinate.
        x: f64,
        /// The y coordinate.
        y: f64,
    },

    /// An edge length is negative, NaN or infinite
    #[error("Invalid edge length: {0}")]
    InvalidLength(f64),
}

/// Result type alias for geometry validation.
pub type GeometryResult<T> = Result<T, GeometryError>;
