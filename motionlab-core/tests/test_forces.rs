//! Unit tests for the force library

use glam::Vec2;
use motionlab_core::forces::*;
use motionlab_core::tests::test_helpers::{approx_eq_f32, approx_eq_vec2};

#[test]
fn test_gravity_points_down_and_scales_with_mass() {
    assert_eq!(gravity(2.0, 9.8), Vec2::new(0.0, 19.6));
    assert_eq!(gravity(1.0, 0.0), Vec2::ZERO);
    assert_eq!(uniform_gravity(0.5, -1.0), Vec2::new(0.5, -1.0));
}

#[test]
fn test_linear_drag_opposes_velocity() {
    let f = linear_drag(Vec2::new(1.0, -2.0), 0.5);
    assert_eq!(f, Vec2::new(-0.5, 1.0));
    assert_eq!(damping(Vec2::new(1.0, -2.0), 0.5), f);
}

#[test]
fn test_quadratic_drag_below_threshold_is_exactly_zero() {
    assert_eq!(quadratic_drag(Vec2::new(0.0005, 0.0), 10.0), Vec2::ZERO);
    assert_eq!(quadratic_drag(Vec2::new(0.0006, -0.0007), 10.0), Vec2::ZERO);
    assert_eq!(quadratic_drag(Vec2::ZERO, 10.0), Vec2::ZERO);
}

#[test]
fn test_quadratic_drag_magnitude() {
    // |v| = 5, magnitude c|v|² = 2.5 along -(0.6, 0.8)
    let f = quadratic_drag(Vec2::new(3.0, 4.0), 0.1);
    assert!(approx_eq_vec2(f, Vec2::new(-1.5, -2.0), 1e-5));
}

#[test]
fn test_spring_extended_pulls_toward_anchor() {
    let f = spring(Vec2::ZERO, Vec2::new(5.0, 0.0), 10.0, 3.0);
    assert!(approx_eq_vec2(f, Vec2::new(20.0, 0.0), 1e-5));
}

#[test]
fn test_spring_compressed_pushes_away() {
    let f = spring(Vec2::ZERO, Vec2::new(2.0, 0.0), 10.0, 3.0);
    assert!(approx_eq_vec2(f, Vec2::new(-10.0, 0.0), 1e-5));
}

#[test]
fn test_spring_at_rest_length_is_zero() {
    let f = spring(Vec2::ZERO, Vec2::new(0.0, 4.0), 7.0, 4.0);
    assert!(f.length() < 1e-5);
}

#[test]
fn test_spring_on_anchor_substitutes_zero() {
    let f = spring(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), 10.0, 0.0);
    assert_eq!(f, Vec2::ZERO);
    assert!(f.is_finite());
}

#[test]
fn test_spring_between_matches_anchored_spring() {
    let p1 = Vec2::new(1.0, 2.0);
    let p2 = Vec2::new(4.0, 6.0);
    assert_eq!(spring_between(p1, p2, 3.0, 1.0), spring(p1, p2, 3.0, 1.0));
}

#[test]
fn test_kinetic_friction() {
    assert_eq!(kinetic_friction(Vec2::new(0.005, 0.0), 0.3, 10.0), Vec2::ZERO);
    let f = kinetic_friction(Vec2::new(2.0, 0.0), 0.3, 10.0);
    assert!(approx_eq_vec2(f, Vec2::new(-3.0, 0.0), 1e-5));
}

#[test]
fn test_static_friction_threshold() {
    assert!(!static_friction_exceeded(5.0, 0.5, 10.0));
    assert!(static_friction_exceeded(5.1, 0.5, 10.0));
    assert!(!static_friction_exceeded(0.0, 0.0, 0.0));
}

#[test]
fn test_gravitational_attraction() {
    // r = 50, G m1 m2 / r² = 6 / 2500, direction (0.6, 0.8)
    let f = gravitational(Vec2::ZERO, 2.0, Vec2::new(30.0, 40.0), 3.0, 1.0);
    assert!(approx_eq_vec2(f, Vec2::new(0.00144, 0.00192), 1e-7));
}

#[test]
fn test_gravitational_is_equal_and_opposite() {
    let a = Vec2::new(10.0, -3.0);
    let b = Vec2::new(-20.0, 7.0);
    let on_a = gravitational(a, 4.0, b, 9.0, 2.0);
    let on_b = gravitational(b, 9.0, a, 4.0, 2.0);
    assert!(approx_eq_vec2(on_a, -on_b, 1e-6));
}

#[test]
fn test_inverse_square_clamped_at_coincidence() {
    let at_zero = inverse_square_magnitude(6.0, 0.0);
    let at_min = inverse_square_magnitude(6.0, MIN_INTERACTION_DISTANCE);
    assert!(at_zero.is_finite());
    assert_eq!(at_zero, at_min);
    assert!(approx_eq_f32(at_zero, 6.0 / 25.0, 1e-6));
    assert_eq!(
        gravitational_magnitude(Vec2::ONE, 2.0, Vec2::ONE, 3.0, 1.0),
        at_min
    );
    assert_eq!(
        electrostatic_magnitude(Vec2::ONE, 2.0, Vec2::ONE, 3.0, 1.0),
        at_min
    );

    // Direction is undefined when coincident; the vector stays finite
    let f = gravitational(Vec2::ONE, 2.0, Vec2::ONE, 3.0, 1.0);
    assert!(f.is_finite());
    let f = electrostatic(Vec2::ONE, 2.0, Vec2::ONE, 3.0, 1.0);
    assert!(f.is_finite());
}

#[test]
fn test_inverse_square_clamped_inside_min_distance() {
    let near = gravitational(Vec2::ZERO, 1.0, Vec2::new(1.0, 0.0), 1.0, 1.0);
    let at_min = gravitational(Vec2::ZERO, 1.0, Vec2::new(5.0, 0.0), 1.0, 1.0);
    assert!(approx_eq_f32(near.length(), at_min.length(), 1e-7));
}

#[test]
fn test_inverse_square_clamped_far_away() {
    assert_eq!(clamp_distance(2000.0), MAX_INTERACTION_DISTANCE);
    assert_eq!(
        inverse_square_magnitude(6.0, 5000.0),
        inverse_square_magnitude(6.0, 1000.0)
    );
}

#[test]
fn test_electrostatic_like_charges_repel() {
    let f = electrostatic(Vec2::ZERO, 2.0, Vec2::new(10.0, 0.0), 3.0, 1.0);
    assert!(approx_eq_vec2(f, Vec2::new(-0.06, 0.0), 1e-6));
}

#[test]
fn test_electrostatic_opposite_charges_attract() {
    let f = electrostatic(Vec2::ZERO, 2.0, Vec2::new(10.0, 0.0), -3.0, 1.0);
    assert!(approx_eq_vec2(f, Vec2::new(0.06, 0.0), 1e-6));
}

#[test]
fn test_buoyancy_points_up() {
    let f = buoyancy(1000.0, 0.002, 9.8);
    assert_eq!(f.x, 0.0);
    assert!(approx_eq_f32(f.y, -19.6, 1e-4));
}

#[test]
fn test_incline_decomposition() {
    let forces = incline(2.0, 30f32.to_radians(), 10.0, 0.1);
    assert!(approx_eq_f32(forces.parallel, 10.0, 1e-4));
    assert!(approx_eq_f32(forces.normal, 17.320_51, 1e-4));
    assert!(approx_eq_f32(forces.friction, 1.732_051, 1e-4));
    // (parallel - friction) resolved along the slope
    assert!(approx_eq_vec2(
        forces.net_force,
        Vec2::new(7.160_254, 4.133_975),
        1e-4
    ));
}

#[test]
fn test_incline_flat_has_no_net_force() {
    let forces = incline(3.0, 0.0, 9.8, 0.0);
    assert_eq!(forces.parallel, 0.0);
    assert!(approx_eq_f32(forces.normal, 29.4, 1e-4));
    assert_eq!(forces.net_force, Vec2::ZERO);
}

#[test]
fn test_restoring_force() {
    assert!(approx_eq_vec2(restoring(2.0, 3.0, 0.0), Vec2::new(-6.0, 0.0), 1e-6));
    let vertical = restoring(2.0, 3.0, std::f32::consts::FRAC_PI_2);
    assert!(approx_eq_vec2(vertical, Vec2::new(0.0, -6.0), 1e-5));
    assert!(approx_eq_vec2(restoring(-1.0, 3.0, 0.0), Vec2::new(3.0, 0.0), 1e-6));
}

#[test]
fn test_lorentz_rotates_velocity() {
    assert_eq!(lorentz(Vec2::new(3.0, 1.0), 2.0, 0.5), Vec2::new(-1.0, 3.0));
    assert_eq!(lorentz(Vec2::new(3.0, 1.0), 0.0, 0.5), Vec2::ZERO);
}

#[test]
fn test_torque_cross_product() {
    assert_eq!(torque(Vec2::new(1.0, 0.0), Vec2::new(0.0, 2.0)), 2.0);
    assert_eq!(torque(Vec2::new(0.0, 1.0), Vec2::new(2.0, 0.0)), -2.0);
    assert_eq!(torque(Vec2::new(2.0, 0.0), Vec2::new(5.0, 0.0)), 0.0);
}
