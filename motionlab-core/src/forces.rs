//! Force library
//!
//! Every function here is pure: it takes literal physical parameters and
//! returns a new force vector (or a scalar torque / a boolean threshold
//! decision). Nothing here touches a body; the caller applies the result.
//!
//! Screen convention: +y points down, so gravity is `(0, m·g)` and buoyancy
//! is negative in y.

use crate::vector::{VectorExt, NORMALIZE_EPSILON};
use glam::Vec2;

/// Below this speed quadratic drag is exactly zero
pub const QUADRATIC_DRAG_MIN_SPEED: f32 = 0.001;

/// Below this speed kinetic friction is exactly zero (static regime)
pub const KINETIC_FRICTION_MIN_SPEED: f32 = 0.01;

/// Inverse-square forces clamp the separation into this range
pub const MIN_INTERACTION_DISTANCE: f32 = 5.0;
pub const MAX_INTERACTION_DISTANCE: f32 = 1000.0;

/// Weight `m·g`, pointing down
pub fn gravity(mass: f32, g: f32) -> Vec2 {
    Vec2::new(0.0, mass * g)
}

/// Mass-independent field, returned as given
pub fn uniform_gravity(gx: f32, gy: f32) -> Vec2 {
    Vec2::new(gx, gy)
}

/// Linear drag `-b·v`
pub fn linear_drag(velocity: Vec2, b: f32) -> Vec2 {
    velocity * -b
}

/// Velocity-proportional damping; identical to [`linear_drag`]
pub fn damping(velocity: Vec2, b: f32) -> Vec2 {
    linear_drag(velocity, b)
}

/// Quadratic drag `-c·|v|²·v̂`, zero below [`QUADRATIC_DRAG_MIN_SPEED`]
pub fn quadratic_drag(velocity: Vec2, c: f32) -> Vec2 {
    let speed = velocity.length();
    if speed < QUADRATIC_DRAG_MIN_SPEED {
        return Vec2::ZERO;
    }
    (velocity / speed) * (-c * speed * speed)
}

/// Hooke spring from `position` toward `anchor`
///
/// Positive stretch pulls toward the anchor, compression pushes away. When
/// the particle sits on the anchor the direction is undefined and the force
/// is zero.
pub fn spring(position: Vec2, anchor: Vec2, k: f32, rest_length: f32) -> Vec2 {
    let displacement = anchor - position;
    let distance = displacement.length();
    if distance < NORMALIZE_EPSILON {
        return Vec2::ZERO;
    }
    let stretch = distance - rest_length;
    (displacement / distance) * (k * stretch)
}

/// Spring force on the particle at `p1` from a spring connecting it to `p2`
pub fn spring_between(p1: Vec2, p2: Vec2, k: f32, rest_length: f32) -> Vec2 {
    spring(p1, p2, k, rest_length)
}

/// Kinetic friction `-μN·v̂`, zero below [`KINETIC_FRICTION_MIN_SPEED`]
pub fn kinetic_friction(velocity: Vec2, mu: f32, normal_force: f32) -> Vec2 {
    let speed = velocity.length();
    if speed < KINETIC_FRICTION_MIN_SPEED {
        return Vec2::ZERO;
    }
    (velocity / speed) * (-mu * normal_force)
}

/// Whether an applied force overcomes static friction
pub fn static_friction_exceeded(applied_force: f32, mu_static: f32, normal_force: f32) -> bool {
    applied_force > mu_static * normal_force
}

/// Clamp a separation into the inverse-square stability range
pub fn clamp_distance(distance: f32) -> f32 {
    distance.clamp(MIN_INTERACTION_DISTANCE, MAX_INTERACTION_DISTANCE)
}

/// `strength / r²` with `r` clamped, so coincident bodies stay finite
pub fn inverse_square_magnitude(strength: f32, distance: f32) -> f32 {
    let r = clamp_distance(distance);
    strength / (r * r)
}

/// Size of the Newtonian attraction between two bodies
pub fn gravitational_magnitude(p1: Vec2, m1: f32, p2: Vec2, m2: f32, big_g: f32) -> f32 {
    inverse_square_magnitude(big_g * m1 * m2, p1.distance(p2))
}

/// Newtonian attraction on body 1 toward body 2, `G·m1·m2/r²`
///
/// Coincident bodies have no direction to pull along and get a zero vector,
/// though [`gravitational_magnitude`] stays at its clamped value.
pub fn gravitational(p1: Vec2, m1: f32, p2: Vec2, m2: f32, big_g: f32) -> Vec2 {
    (p2 - p1).normalized_or_zero() * gravitational_magnitude(p1, m1, p2, m2, big_g)
}

/// Signed Coulomb magnitude; positive means repulsion
pub fn electrostatic_magnitude(p1: Vec2, q1: f32, p2: Vec2, q2: f32, k: f32) -> f32 {
    inverse_square_magnitude(k * q1 * q2, p1.distance(p2))
}

/// Coulomb force on charge 1, `k·q1·q2/r²`, repulsive for like charges
///
/// Coincident charges get a zero vector, while [`electrostatic_magnitude`]
/// still reports the value at the minimum interaction distance.
pub fn electrostatic(p1: Vec2, q1: f32, p2: Vec2, q2: f32, k: f32) -> Vec2 {
    (p1 - p2).normalized_or_zero() * electrostatic_magnitude(p1, q1, p2, q2, k)
}

/// Archimedes' buoyancy `ρ·V·g`, pointing up
pub fn buoyancy(fluid_density: f32, volume: f32, g: f32) -> Vec2 {
    Vec2::new(0.0, -fluid_density * volume * g)
}

/// Weight decomposed along an incline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclineForces {
    /// Down-slope component `m·g·sin θ`
    pub parallel: f32,
    /// Into-surface component `m·g·cos θ`
    pub normal: f32,
    /// Friction magnitude `μ·normal`
    pub friction: f32,
    /// `(parallel - friction)` resolved back into x/y
    pub net_force: Vec2,
}

/// Decompose the weight of a block resting on an incline of `angle` radians
pub fn incline(mass: f32, angle: f32, g: f32, mu: f32) -> InclineForces {
    let weight = mass * g;
    let (sin, cos) = angle.sin_cos();
    let parallel = weight * sin;
    let normal = weight * cos;
    let friction = mu * normal;
    let net_parallel = parallel - friction;
    InclineForces {
        parallel,
        normal,
        friction,
        net_force: Vec2::new(net_parallel * cos, net_parallel * sin),
    }
}

/// Simple-harmonic restoring force `-k·x` along direction `angle`
pub fn restoring(displacement: f32, k: f32, angle: f32) -> Vec2 {
    let magnitude = -k * displacement;
    let (sin, cos) = angle.sin_cos();
    Vec2::new(magnitude * cos, magnitude * sin)
}

/// Magnetic force for a field along the out-of-plane axis: `q·B·(-v_y, v_x)`
pub fn lorentz(velocity: Vec2, charge: f32, b_field: f32) -> Vec2 {
    velocity.perpendicular() * (charge * b_field)
}

/// Torque of `force` applied at `lever_arm` from the rotation center
pub fn torque(lever_arm: Vec2, force: Vec2) -> f32 {
    lever_arm.cross(force)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_drag_opposes_motion() {
        let f = quadratic_drag(Vec2::new(2.0, 0.0), 0.5);
        assert!((f.x + 2.0).abs() < 1e-6);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn spring_on_anchor_is_zero() {
        assert_eq!(spring(Vec2::ONE, Vec2::ONE, 10.0, 2.0), Vec2::ZERO);
    }

    #[test]
    fn coincident_bodies_have_magnitude_but_no_direction() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(gravitational(p, 2.0, p, 5.0, 1.0), Vec2::ZERO);
        assert_eq!(gravitational_magnitude(p, 2.0, p, 5.0, 1.0), 10.0 / 25.0);
        assert_eq!(electrostatic(p, 1.0, p, 1.0, 50.0), Vec2::ZERO);
        assert_eq!(electrostatic_magnitude(p, 1.0, p, 1.0, 50.0), 2.0);
    }

    #[test]
    fn lorentz_is_quarter_turn_of_velocity() {
        let v = Vec2::new(3.0, 1.0);
        let f = lorentz(v, 2.0, 0.5);
        assert_eq!(f, Vec2::new(-1.0, 3.0));
        assert_eq!(f.dot(v), 0.0);
    }
}
