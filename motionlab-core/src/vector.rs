//! 2D vector helpers on top of `glam::Vec2`
//!
//! Arithmetic (`+`, `-`, scalar `*`, `length`, `length_squared`, `dot`) comes
//! straight from glam. This module adds the checked normalization used by the
//! force library, the scalar cross product used for torque, and rotations
//! between a rigid body's local frame and the world frame.

use crate::error::PhysicsError;
use glam::Vec2;

/// Vector type used across the crate
pub type Vector2 = Vec2;

/// Magnitudes below this are treated as direction-less
pub const NORMALIZE_EPSILON: f32 = 1e-3;

pub trait VectorExt: Sized {
    /// Unit vector, or `DegenerateVector` when the magnitude is below
    /// [`NORMALIZE_EPSILON`]
    fn normalized_checked(self) -> Result<Self, PhysicsError>;

    /// Unit vector, or zero when the magnitude is below [`NORMALIZE_EPSILON`]
    fn normalized_or_zero(self) -> Self;

    /// Counter-clockwise quarter turn: `(x, y) -> (-y, x)`
    fn perpendicular(self) -> Self;

    /// Scalar cross product `self.x * other.y - self.y * other.x`
    fn cross(self, other: Self) -> f32;

    /// Rotate by `angle` radians
    fn rotated(self, angle: f32) -> Self;

    /// Direction angle in degrees, measured from +x
    fn heading_degrees(self) -> f32;
}

impl VectorExt for Vec2 {
    fn normalized_checked(self) -> Result<Self, PhysicsError> {
        let magnitude = self.length();
        if magnitude < NORMALIZE_EPSILON {
            return Err(PhysicsError::DegenerateVector {
                magnitude,
                epsilon: NORMALIZE_EPSILON,
            });
        }
        Ok(self / magnitude)
    }

    fn normalized_or_zero(self) -> Self {
        self.normalized_checked().unwrap_or(Vec2::ZERO)
    }

    fn perpendicular(self) -> Self {
        Vec2::new(-self.y, self.x)
    }

    fn cross(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn heading_degrees(self) -> f32 {
        self.y.atan2(self.x).to_degrees()
    }
}

/// Resultant of a set of forces acting on the same point
pub fn net_force(forces: &[Vec2]) -> Vec2 {
    forces.iter().copied().sum()
}
