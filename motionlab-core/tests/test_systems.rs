use motionlab_core::systems::{FourMassPulley, InclinePulley, PulleyMode};
use motionlab_core::tests::test_helpers::approx_eq_f32;
use motionlab_core::PhysicsError;

#[test]
fn test_incline_pulley_heavy_hanging_block() {
    let system = InclinePulley::new(1.0, 2.0, 30f32.to_radians(), 9.8).unwrap();
    assert!(approx_eq_f32(system.acceleration(), 4.9, 1e-4));
    assert!(approx_eq_f32(system.tension(), 9.8, 1e-4));
    assert!(approx_eq_f32(system.displacement(2.0), 9.8, 1e-3));
    assert!(approx_eq_f32(system.velocity(2.0), 9.8, 1e-3));
}

#[test]
fn test_incline_pulley_in_balance() {
    let system = InclinePulley::new(2.0, 1.0, 30f32.to_radians(), 10.0).unwrap();
    assert!(approx_eq_f32(system.acceleration(), 0.0, 1e-5));
    assert!(approx_eq_f32(system.tension(), 10.0, 1e-4));
}

#[test]
fn test_four_mass_connected() {
    let system = FourMassPulley::new(1.0, 10.0, PulleyMode::Connected).unwrap();
    assert_eq!(system.mass_a(), 5.0);
    assert_eq!(system.mass_b(), system.mass_c());
    assert_eq!(system.mass_d(), 1.0);
    assert!(approx_eq_f32(system.acceleration(), 200.0 / 126.0, 1e-4));
    assert_eq!(system.acceleration_b(), system.acceleration());
    assert!(approx_eq_f32(system.tension_b(), 15.238, 1e-3));
}

#[test]
fn test_four_mass_disconnected() {
    let system = FourMassPulley::new(1.0, 10.0, PulleyMode::Disconnected).unwrap();
    assert!(approx_eq_f32(system.acceleration(), 10.0 / 3.0, 1e-4));
    assert!(approx_eq_f32(system.acceleration_b(), 4.0, 1e-6));
    assert_eq!(system.tension_b(), 0.0);
    assert!(approx_eq_f32(system.displacement(3.0), 15.0, 1e-3));
}

#[test]
fn test_systems_reject_bad_mass() {
    assert_eq!(
        InclinePulley::new(0.0, 1.0, 0.5, 9.8).unwrap_err(),
        PhysicsError::InvalidMass(0.0)
    );
    assert_eq!(
        FourMassPulley::new(-1.0, 9.8, PulleyMode::Connected).unwrap_err(),
        PhysicsError::InvalidMass(-1.0)
    );
}
