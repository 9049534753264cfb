//! Error types for the finger joint tools.
//!
//! Validation happens before any edge is laid out, so an error always means
//! no poses were produced.

use fingerkit_core::GeometryError;
use thiserror::Error;

/// Errors that can occur while laying out finger joints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FingerJointError {
    /// A joint parameter is zero, negative, NaN or infinite.
    #[error("Invalid parameter '{name}': {value} (must be finite and greater than zero)")]
    InvalidParameter { name: &'static str, value: f64 },

    /// An input edge cannot be laid out.
    #[error("Invalid edge at index {index}: {source}")]
    InvalidEdge {
        index: usize,
        source: GeometryError,
    },

    /// An edge is so long relative to the finger length that its finger
    /// count cannot be represented.
    #[error("Edge at index {index} too long for finger length {finger_length}: {length}")]
    TooManyFingers {
        index: usize,
        length: f64,
        finger_length: f64,
    },
}

/// Result type alias for finger joint operations.
pub type FingerJointResult<T> = Result<T, FingerJointError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_parameter_display() {
        let err = FingerJointError::InvalidParameter {
            name: "finger_length",
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'finger_length': 0 (must be finite and greater than zero)"
        );
    }

    #[test]
    fn test_invalid_edge_source() {
        let err = FingerJointError::InvalidEdge {
            index: 3,
            source: GeometryError::InvalidLength(-1.0),
        };
        assert_eq!(
            err.to_string(),
            "Invalid edge at index 3: Invalid edge length: -1"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_too_many_fingers_display() {
        let err = FingerJointError::TooManyFingers {
            index: 0,
            length: 1e300,
            finger_length: 1.0,
        };
        assert!(err.to_string().starts_with("Edge at index 0 too long for finger length 1:"));
    }
}
