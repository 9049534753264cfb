//! # Fingerkit
//!
//! Finger (tab-and-slot) joint layout for laser-cut and CNC panel assembly.
//!
//! ## Architecture
//!
//! Fingerkit is organized as a workspace with multiple crates:
//!
//! 1. **fingerkit-core** - Points, explicit-unit angles, edges and poses
//! 2. **fingerkit-camtools** - Finger joint layout engine and rectangle placement
//! 3. **fingerkit** - This crate, re-exporting both plus logging setup
//!
//! ## Example
//!
//! ```
//! use fingerkit::{layout, AngleUnit, LineEdge, Point};
//!
//! let edge = LineEdge::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
//! let poses = layout(&[edge], 3.0, 10.0).unwrap();
//! assert_eq!(poses[0].len(), 5);
//! assert_eq!(poses[0][2].center, Point::new(50.0, 0.0));
//! assert_eq!(poses[0][2].rotation_in(AngleUnit::Degrees), 0.0);
//! ```

pub use fingerkit_core::{
    Angle, AngleUnit, EdgeGeometry, GeometryError, GeometryResult, LineEdge, Point, Pose,
};

pub use fingerkit_camtools::{
    build_fingers, finger_count, layout, layout_par, plan_edge, CsgPlacer, EdgePlan,
    FingerJointError, FingerJointLayout, FingerJointParameters, FingerJointResult, FingerOutline,
    OutlinePlacer, RectanglePlacer, MAX_FINGERS_PER_EDGE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support (INFO when unset)
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
