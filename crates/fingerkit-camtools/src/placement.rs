//! Finger placement
//!
//! The layout engine stops at poses. A [`RectanglePlacer`] is the caller's
//! capability for turning a pose into real geometry: a `width × height`
//! rectangle centered on its local origin, rotated by the pose and then moved
//! to the pose center. Rotations are handed over as [`Angle`]s; each placer
//! picks the unit its kernel expects.
//!
//! [`Angle`]: fingerkit_core::Angle

use csgrs::sketch::Sketch;
use csgrs::traits::CSG;
use nalgebra::{Matrix4, Vector3};

use fingerkit_core::{Point, Pose};

use crate::finger_joint::FingerJointParameters;

/// Caller capability that instantiates a centered rectangle at a pose.
pub trait RectanglePlacer {
    type Shape;

    fn place_rectangle(&mut self, width: f64, height: f64, pose: &Pose) -> Self::Shape;
}

/// Instantiate one finger rectangle per pose, keeping the per-edge nesting
/// and order of `layout`.
pub fn build_fingers<P: RectanglePlacer>(
    layout: &[Vec<Pose>],
    params: &FingerJointParameters,
    placer: &mut P,
) -> Vec<Vec<P::Shape>> {
    let (width, height) = params.finger_size();
    layout
        .iter()
        .map(|poses| {
            poses
                .iter()
                .map(|pose| placer.place_rectangle(width, height, pose))
                .collect()
        })
        .collect()
}

/// World-space outline of a placed finger.
#[derive(Debug, Clone, PartialEq)]
pub struct FingerOutline {
    pub pose: Pose,
    pub width: f64,
    pub height: f64,
    /// Counter-clockwise, starting at the local (-w/2, -h/2) corner
    pub corners: [Point; 4],
}

impl FingerOutline {
    pub fn new(width: f64, height: f64, pose: Pose) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let corners = [
            Point::new(-hw, -hh),
            Point::new(hw, -hh),
            Point::new(hw, hh),
            Point::new(-hw, hh),
        ]
        .map(|c| pose.transform_point(c));

        Self {
            pose,
            width,
            height,
            corners,
        }
    }

    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let local = self
            .pose
            .to_isometry()
            .inverse_transform_point(&nalgebra::Point2::new(p.x, p.y));
        local.x.abs() <= self.width / 2.0 + tolerance
            && local.y.abs() <= self.height / 2.0 + tolerance
    }

    /// `(min_x, min_y, max_x, max_y)`
    pub fn axis_aligned_bounds(&self) -> (f64, f64, f64, f64) {
        let min_x = self.corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = self.corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = self.corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = self.corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        (min_x, min_y, max_x, max_y)
    }
}

/// Places fingers as plain corner outlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlinePlacer;

impl RectanglePlacer for OutlinePlacer {
    type Shape = FingerOutline;

    fn place_rectangle(&mut self, width: f64, height: f64, pose: &Pose) -> FingerOutline {
        FingerOutline::new(width, height, *pose)
    }
}

/// Places fingers as `csgrs` sketches so they can be unioned with, or
/// subtracted from, a panel outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsgPlacer;

impl CsgPlacer {
    /// Union of all sketches, e.g. the fingers of one edge.
    pub fn union_all(sketches: &[Sketch<()>]) -> Sketch<()> {
        sketches
            .iter()
            .fold(Sketch::new(), |acc, sketch| acc.union(sketch))
    }
}

impl RectanglePlacer for CsgPlacer {
    type Shape = Sketch<()>;

    fn place_rectangle(&mut self, width: f64, height: f64, pose: &Pose) -> Sketch<()> {
        // Sketch::rectangle spans (0,0)..(w,h); center it before rotating.
        let center_fix = Matrix4::new_translation(&Vector3::new(-width / 2.0, -height / 2.0, 0.0));
        Sketch::rectangle(width, height, None).transform(&(pose.to_matrix4() * center_fix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerkit_core::Angle;

    #[test]
    fn test_outline_corners_rotated() {
        let pose = Pose::new(Point::new(0.0, 10.0), Angle::from_degrees(90.0));
        let outline = FingerOutline::new(10.0, 3.0, pose);
        let (min_x, min_y, max_x, max_y) = outline.axis_aligned_bounds();
        assert!((min_x + 1.5).abs() < 1e-9);
        assert!((max_x - 1.5).abs() < 1e-9);
        assert!((min_y - 5.0).abs() < 1e-9);
        assert!((max_y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_outline_contains_point() {
        let pose = Pose::new(Point::new(5.0, 5.0), Angle::from_degrees(45.0));
        let outline = FingerOutline::new(4.0, 2.0, pose);
        assert!(outline.contains_point(Point::new(5.0, 5.0), 0.0));
        assert!(outline.contains_point(outline.corners[2], 1e-9));
        assert!(!outline.contains_point(Point::new(7.0, 5.0), 0.0));
    }

    #[derive(Default)]
    struct SizeRecorder {
        calls: usize,
    }

    impl RectanglePlacer for SizeRecorder {
        type Shape = (f64, f64);

        fn place_rectangle(&mut self, width: f64, height: f64, _pose: &Pose) -> (f64, f64) {
            self.calls += 1;
            (width, height)
        }
    }

    #[test]
    fn test_build_fingers_keeps_nesting() {
        let params = FingerJointParameters::new(3.0, 10.0).unwrap();
        let layout = vec![vec![Pose::identity(), Pose::identity()], vec![]];
        let mut placer = SizeRecorder::default();
        let shapes = build_fingers(&layout, &params, &mut placer);
        assert_eq!(shapes, vec![vec![(10.0, 3.0), (10.0, 3.0)], vec![]]);
        assert_eq!(placer.calls, 2);
    }

    #[test]
    fn test_csg_rectangle_is_centered_on_pose() {
        let pose = Pose::new(Point::new(20.0, 0.0), Angle::ZERO);
        let sketch = CsgPlacer.place_rectangle(10.0, 3.0, &pose);

        let mp = sketch.to_multipolygon();
        assert_eq!(mp.0.len(), 1);
        let xs: Vec<f64> = mp.0[0].exterior().0.iter().map(|c| c.x).collect();
        let ys: Vec<f64> = mp.0[0].exterior().0.iter().map(|c| c.y).collect();
        let min_x = xs.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min_y = ys.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!((min_x - 15.0).abs() < 1e-6);
        assert!((max_x - 25.0).abs() < 1e-6);
        assert!((min_y + 1.5).abs() < 1e-6);
        assert!((max_y - 1.5).abs() < 1e-6);
    }
}
