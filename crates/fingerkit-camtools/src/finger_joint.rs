//! Finger Joint Layout
//!
//! Places interlocking fingers along straight edges. Each edge gets
//! `max(1, floor((L + f) / 2f))` fingers of width `f`, separated by gaps of
//! the same width, with the leftover length split evenly over both ends.
//! Fingers are reported as poses; building the rectangles is left to a
//! [`RectanglePlacer`](crate::placement::RectanglePlacer).

pub mod types;

pub use types::{EdgePlan, FingerJointParameters};

use fingerkit_core::{Angle, EdgeGeometry, Pose};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{FingerJointError, FingerJointResult};

/// Largest finger count an edge may get: `2n - 1` slots must fit in `usize`.
pub const MAX_FINGERS_PER_EDGE: usize = usize::MAX / 2;

/// Number of fingers cut along an edge of `length`.
///
/// The `+ f` biases the floor so an edge of exactly `2nf` still gets `n`
/// fingers. Every edge gets at least one. `None` when the count would exceed
/// [`MAX_FINGERS_PER_EDGE`] or is not a number.
pub fn finger_count(length: f64, finger_length: f64) -> Option<usize> {
    let fit = ((length + finger_length) / (finger_length * 2.0)).floor();
    if fit.is_nan() || fit >= MAX_FINGERS_PER_EDGE as f64 {
        return None;
    }
    if fit >= 1.0 {
        Some(fit as usize)
    } else {
        Some(1)
    }
}

/// Calculate finger count and centering for an edge of the given length.
pub fn plan_edge(length: f64, finger_length: f64) -> Option<EdgePlan> {
    let finger_count = finger_count(length, finger_length)?;
    let slots = finger_count.checked_mul(2)?.checked_sub(1)?;
    let total_span = slots as f64 * finger_length;

    Some(EdgePlan {
        length,
        finger_length,
        finger_count,
        total_span,
        start_offset: (length - total_span) / 2.0,
    })
}

/// Finger poses for every edge, index-aligned with `edges`.
///
/// Each pose centers a `finger_length × material_thickness` rectangle; the
/// rotation is the edge direction. Parameters and all edges are validated
/// before any layout work, so an error never comes with partial output.
pub fn layout<E: EdgeGeometry>(
    edges: &[E],
    material_thickness: f64,
    finger_length: f64,
) -> FingerJointResult<Vec<Vec<Pose>>> {
    let params = FingerJointParameters::new(material_thickness, finger_length)?;
    FingerJointLayout::new(params)?.layout(edges)
}

/// [`layout`] with edges processed in parallel.
pub fn layout_par<E: EdgeGeometry + Sync>(
    edges: &[E],
    material_thickness: f64,
    finger_length: f64,
) -> FingerJointResult<Vec<Vec<Pose>>> {
    let params = FingerJointParameters::new(material_thickness, finger_length)?;
    FingerJointLayout::new(params)?.layout_par(edges)
}

/// Finger joint layout for a fixed set of validated parameters.
#[derive(Debug, Clone, Copy)]
pub struct FingerJointLayout {
    params: FingerJointParameters,
}

impl FingerJointLayout {
    pub fn new(params: FingerJointParameters) -> FingerJointResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &FingerJointParameters {
        &self.params
    }

    pub fn plan(&self, length: f64) -> Option<EdgePlan> {
        plan_edge(length, self.params.finger_length)
    }

    pub fn layout<E: EdgeGeometry>(&self, edges: &[E]) -> FingerJointResult<Vec<Vec<Pose>>> {
        let plans = self.plan_edges(edges)?;
        Ok(edges
            .iter()
            .zip(&plans)
            .map(|(edge, plan)| place_fingers(edge, plan))
            .collect())
    }

    pub fn layout_par<E: EdgeGeometry + Sync>(
        &self,
        edges: &[E],
    ) -> FingerJointResult<Vec<Vec<Pose>>> {
        let plans = self.plan_edges(edges)?;
        Ok(edges
            .par_iter()
            .zip(&plans)
            .map(|(edge, plan)| place_fingers(edge, plan))
            .collect())
    }

    /// Finger poses along a single edge, start to end.
    pub fn layout_edge<E: EdgeGeometry + ?Sized>(&self, edge: &E) -> FingerJointResult<Vec<Pose>> {
        let plan = self.plan_edge_at(0, edge)?;
        Ok(place_fingers(edge, &plan))
    }

    /// Validate and plan every edge before any poses are produced.
    fn plan_edges<E: EdgeGeometry>(&self, edges: &[E]) -> FingerJointResult<Vec<EdgePlan>> {
        edges
            .iter()
            .enumerate()
            .map(|(index, edge)| self.plan_edge_at(index, edge))
            .collect()
    }

    fn plan_edge_at<E: EdgeGeometry + ?Sized>(
        &self,
        index: usize,
        edge: &E,
    ) -> FingerJointResult<EdgePlan> {
        edge.validate()
            .map_err(|source| FingerJointError::InvalidEdge { index, source })?;
        let length = edge.length();
        self.plan(length)
            .ok_or(FingerJointError::TooManyFingers {
                index,
                length,
                finger_length: self.params.finger_length,
            })
    }
}

fn place_fingers<E: EdgeGeometry + ?Sized>(edge: &E, plan: &EdgePlan) -> Vec<Pose> {
    let start = edge.start_point();
    // A zero-length edge has no direction, whatever its endpoints say.
    let angle = if plan.length == 0.0 {
        Angle::ZERO
    } else {
        edge.direction()
    };

    debug!(
        length = plan.length,
        fingers = plan.finger_count,
        start_offset = plan.start_offset,
        angle = %angle,
        "Planned finger edge"
    );
    if plan.overshoots() {
        debug!(
            length = plan.length,
            span = plan.total_span,
            "Finger pattern extends past edge ends"
        );
    }

    plan.midpoint_offsets()
        .map(|offset| {
            let pose = Pose::new(start.offset_along(angle, offset), angle);
            trace!(offset, x = pose.center.x, y = pose.center.y, "Finger");
            pose
        })
        .collect()
}
