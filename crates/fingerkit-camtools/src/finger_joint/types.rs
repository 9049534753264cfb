//! Type definitions for the finger joint layout

use serde::{Deserialize, Serialize};

use crate::error::{FingerJointError, FingerJointResult};

/// Caller-supplied joint dimensions. Both values are required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerJointParameters {
    /// Panel thickness, the finger's extent across the edge
    pub material_thickness: f64,
    /// Finger (and slot) width along the edge
    pub finger_length: f64,
}

impl FingerJointParameters {
    pub fn new(material_thickness: f64, finger_length: f64) -> FingerJointResult<Self> {
        let params = Self {
            material_thickness,
            finger_length,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> FingerJointResult<()> {
        check_positive("material_thickness", self.material_thickness)?;
        check_positive("finger_length", self.finger_length)?;
        Ok(())
    }

    /// `(width, height)` of each finger rectangle: width runs along the edge.
    pub fn finger_size(&self) -> (f64, f64) {
        (self.finger_length, self.material_thickness)
    }
}

fn check_positive(name: &'static str, value: f64) -> FingerJointResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FingerJointError::InvalidParameter { name, value })
    }
}

/// Finger arrangement along one edge, in edge-local offsets from the start
/// point.
///
/// The edge is split into `2 * finger_count - 1` slots of `finger_length`
/// each; even slots are fingers, odd slots are the gaps between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePlan {
    pub length: f64,
    pub finger_length: f64,
    pub finger_count: usize,
    /// Span from the start of the first finger to the end of the last
    pub total_span: f64,
    /// Offset of the first finger's leading side; negative when the pattern
    /// is wider than the edge
    pub start_offset: f64,
}

impl EdgePlan {
    /// Fingers plus the gaps between them.
    pub fn slot_count(&self) -> usize {
        self.finger_count.saturating_mul(2).saturating_sub(1)
    }

    /// Leading-side offset of each finger, start to end.
    pub fn finger_offsets(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.slot_count())
            .step_by(2)
            .map(move |i| self.start_offset + i as f64 * self.finger_length)
    }

    /// Center offset of each finger, start to end.
    pub fn midpoint_offsets(&self) -> impl Iterator<Item = f64> + '_ {
        let half = self.finger_length / 2.0;
        self.finger_offsets().map(move |o| o + half)
    }

    /// True when the finger pattern sticks out past the ends of the edge.
    /// Only happens for edges shorter than one finger, which still get one.
    pub fn overshoots(&self) -> bool {
        self.total_span > self.length
    }
}
