//! Rigid planar placement
//!
//! A [`Pose`] is what the layout engine hands to a geometry builder: where a
//! shape's local origin goes and how far it is turned about that origin.

use nalgebra::{Isometry2, Matrix4, Point2, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::units::{Angle, AngleUnit};

/// Center position plus rotation about +Z. Z translation and the other
/// rotation axes are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub center: Point,
    pub rotation: Angle,
}

impl Pose {
    pub fn new(center: Point, rotation: Angle) -> Self {
        Self { center, rotation }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    /// Rotation in the unit the consuming primitive expects.
    pub fn rotation_in(&self, unit: AngleUnit) -> f64 {
        self.rotation.in_unit(unit)
    }

    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(
            Vector2::new(self.center.x, self.center.y),
            self.rotation.radians(),
        )
    }

    /// Homogeneous 3-D transform for kernels that place shapes in space.
    pub fn to_matrix4(&self) -> Matrix4<f64> {
        let rotation = Matrix4::new_rotation(Vector3::new(0.0, 0.0, self.rotation.radians()));
        let translation =
            Matrix4::new_translation(&Vector3::new(self.center.x, self.center.y, 0.0));
        translation * rotation
    }

    /// Map a point from shape-local coordinates to world coordinates:
    /// rotate about the local origin, then translate to `center`.
    pub fn transform_point(&self, local: Point) -> Point {
        let p = self.to_isometry().transform_point(&Point2::new(local.x, local.y));
        Point::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pose() {
        let pose = Pose::identity();
        assert_eq!(pose.transform_point(Point::new(2.0, 3.0)), Point::new(2.0, 3.0));
        assert_eq!(pose.rotation_in(AngleUnit::Degrees), 0.0);
    }

    #[test]
    fn test_rotate_then_translate() {
        let pose = Pose::new(Point::new(10.0, 0.0), Angle::from_degrees(90.0));
        let p = pose.transform_point(Point::new(1.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_matches_isometry() {
        let pose = Pose::new(Point::new(-4.0, 7.5), Angle::from_degrees(30.0));
        let local = Point::new(3.0, -2.0);

        let m = pose.to_matrix4();
        let v = m * nalgebra::Vector4::new(local.x, local.y, 0.0, 1.0);
        let expected = pose.transform_point(local);

        assert!((v.x - expected.x).abs() < 1e-9);
        assert!((v.y - expected.y).abs() < 1e-9);
        assert!(v.z.abs() < 1e-12);
    }

    #[test]
    fn test_pose_serde() {
        let pose = Pose::new(Point::new(1.0, 2.0), Angle::from_degrees(45.0));
        let json = serde_json::to_string(&pose).unwrap();
        let back: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(pose, back);
    }
}
