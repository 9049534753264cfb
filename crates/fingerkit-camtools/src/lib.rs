//! # Fingerkit CAM Tools
//!
//! Finger (tab-and-slot) joint layout for laser-cut and CNC panel assembly.
//!
//! ## Tools Included
//!
//! - **Finger Joint Layout**: Works out how many fingers fit along each
//!   straight edge, centers the pattern and emits one [`Pose`] per finger
//! - **Placement**: Turns poses into caller geometry through the
//!   [`RectanglePlacer`] capability, with outline and CSG sketch builders
//!
//! [`Pose`]: fingerkit_core::Pose

pub mod error;
pub mod finger_joint;
pub mod placement;

pub use error::{FingerJointError, FingerJointResult};
pub use finger_joint::{
    finger_count, layout, layout_par, plan_edge, EdgePlan, FingerJointLayout, MAX_FINGERS_PER_EDGE,
    FingerJointParameters,
};
pub use placement::{build_fingers, CsgPlacer, FingerOutline, OutlinePlacer, RectanglePlacer};
