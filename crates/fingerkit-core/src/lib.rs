//! # Fingerkit Core
//!
//! Core geometry types for Fingerkit.
//! Provides the planar value types shared by the layout engine and the
//! geometry builders that consume its output: points, explicit-unit angles,
//! straight edges and rigid 2-D poses.

pub mod error;
pub mod geometry;
pub mod pose;
pub mod units;

pub use error::{GeometryError, GeometryResult};
pub use geometry::{EdgeGeometry, LineEdge, Point};
pub use pose::Pose;
pub use units::{Angle, AngleUnit};
