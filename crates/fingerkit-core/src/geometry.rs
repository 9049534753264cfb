//! Planar edge geometry
//!
//! The layout engine only ever sees an edge through [`EdgeGeometry`]: its two
//! endpoints and its length. Any geometry kernel can provide edges by
//! implementing the trait; [`LineEdge`] is the plain straight-segment version.

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::units::Angle;

/// A point in the plane of the edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Point reached by travelling `distance` from here in direction `angle`.
    pub fn offset_along(&self, angle: Angle, distance: f64) -> Point {
        let (c, s) = angle.unit_vector();
        Point::new(self.x + c * distance, self.y + s * distance)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A straight edge as seen by the layout engine.
///
/// `length()` is authoritative: the engine walks fingers along the direction
/// from `start_point()` to `end_point()` but spaces them by `length()`, even
/// if the two disagree.
pub trait EdgeGeometry {
    fn start_point(&self) -> Point;
    fn end_point(&self) -> Point;
    fn length(&self) -> f64;

    /// `end - start` as `(dx, dy)`.
    fn delta(&self) -> (f64, f64) {
        let start = self.start_point();
        let end = self.end_point();
        (end.x - start.x, end.y - start.y)
    }

    /// Direction of travel from start to end.
    ///
    /// Coincident endpoints have no direction; they report [`Angle::ZERO`]
    /// rather than whatever `atan2` makes of signed zeros.
    fn direction(&self) -> Angle {
        let (dx, dy) = self.delta();
        if dx == 0.0 && dy == 0.0 {
            Angle::ZERO
        } else {
            Angle::from_radians(dy.atan2(dx))
        }
    }

    /// Check that the edge can be laid out.
    fn validate(&self) -> GeometryResult<()> {
        for p in [self.start_point(), self.end_point()] {
            if !p.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { x: p.x, y: p.y });
            }
        }
        let length = self.length();
        if !length.is_finite() || length < 0.0 {
            return Err(GeometryError::InvalidLength(length));
        }
        Ok(())
    }
}

impl<E: EdgeGeometry + ?Sized> EdgeGeometry for &E {
    fn start_point(&self) -> Point {
        (**self).start_point()
    }

    fn end_point(&self) -> Point {
        (**self).end_point()
    }

    fn length(&self) -> f64 {
        (**self).length()
    }
}

/// Straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineEdge {
    pub start: Point,
    pub end: Point,
    length: f64,
}

impl LineEdge {
    /// Segment whose length is the distance between its endpoints.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            length: start.distance_to(&end),
        }
    }

    /// Segment carrying a caller-supplied length, e.g. one measured by a
    /// geometry kernel. The value is not reconciled with the endpoints.
    pub fn with_length(start: Point, end: Point, length: f64) -> Self {
        Self { start, end, length }
    }

    /// Mid point of the segment.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}

impl EdgeGeometry for LineEdge {
    fn start_point(&self) -> Point {
        self.start
    }

    fn end_point(&self) -> Point {
        self.end
    }

    fn length(&self) -> f64 {
        self.length
    }
}
