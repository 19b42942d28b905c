//! Static checks on a scenario before any body is built

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::scenario::{DetectorKind, ForceDecl, ScenarioConfig};
use std::collections::HashSet;

/// Step counts above this still run but are probably a typo
pub const STEP_WARNING_THRESHOLD: u32 = 1_000_000;

/// Check a scenario and return all diagnostics found
pub fn analyze_scenario(scenario: &ScenarioConfig) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    if !(scenario.dt > 0.0 && scenario.dt.is_finite()) {
        diagnostics.push(Diagnostic::error(format!(
            "dt must be positive, got {}",
            scenario.dt
        )));
    }
    if scenario.steps == 0 {
        diagnostics.push(Diagnostic::error("steps must be at least 1"));
    } else if scenario.steps > STEP_WARNING_THRESHOLD {
        diagnostics.push(Diagnostic::warning(format!(
            "{} steps is unusually long",
            scenario.steps
        )));
    }

    // Particles: duplicate names, positive mass and capacity
    let mut particles = HashSet::new();
    for particle in &scenario.particles {
        if !particles.insert(particle.name.as_str()) {
            diagnostics.push(Diagnostic::error(format!(
                "duplicate particle name '{}'",
                particle.name
            )));
        }
        if !(particle.mass > 0.0 && particle.mass.is_finite()) {
            diagnostics.push(Diagnostic::error(format!(
                "particle '{}' must have positive mass, got {}",
                particle.name, particle.mass
            )));
        }
        if particle.history_capacity == 0 {
            diagnostics.push(Diagnostic::error(format!(
                "particle '{}' needs a history capacity of at least 1",
                particle.name
            )));
        }
    }

    // Rigid bodies: the same preconditions their constructors enforce
    let mut bodies = HashSet::new();
    for body in &scenario.rigid_bodies {
        if !bodies.insert(body.name.as_str()) {
            diagnostics.push(Diagnostic::error(format!(
                "duplicate rigid body name '{}'",
                body.name
            )));
        }
        if particles.contains(body.name.as_str()) {
            diagnostics.push(Diagnostic::error(format!(
                "rigid body '{}' shares its name with a particle",
                body.name
            )));
        }
        if !(body.damping > 0.0 && body.damping <= 1.0) {
            diagnostics.push(Diagnostic::error(format!(
                "rigid body '{}' damping must lie in (0, 1], got {}",
                body.name, body.damping
            )));
        }
        // An explicit inertia replaces the rod's mass and geometry
        match body.moment_of_inertia {
            Some(inertia) => {
                if !(inertia > 0.0 && inertia.is_finite()) {
                    diagnostics.push(Diagnostic::error(format!(
                        "rigid body '{}' must have positive moment of inertia, got {}",
                        body.name, inertia
                    )));
                }
            }
            None => {
                if !(body.mass > 0.0 && body.mass.is_finite()) {
                    diagnostics.push(Diagnostic::error(format!(
                        "rigid body '{}' must have positive mass, got {}",
                        body.name, body.mass
                    )));
                }
                if !(body.width > 0.0 && body.height > 0.0) {
                    diagnostics.push(Diagnostic::error(format!(
                        "rigid body '{}' needs positive width and height, got {} x {}",
                        body.name, body.width, body.height
                    )));
                }
            }
        }
        if body.history_capacity == 0 {
            diagnostics.push(Diagnostic::error(format!(
                "rigid body '{}' needs a history capacity of at least 1",
                body.name
            )));
        }
    }

    // Force and torque references
    let mut driven = HashSet::new();
    for force in &scenario.forces {
        for target in force.targets() {
            if particles.contains(target) {
                driven.insert(target);
            } else {
                diagnostics.push(Diagnostic::error(format!(
                    "force refers to unknown particle '{}'",
                    target
                )));
            }
        }
        if let ForceDecl::SpringBetween { a, b, .. }
        | ForceDecl::Gravitational { a, b, .. }
        | ForceDecl::Electrostatic { a, b, .. } = force
        {
            if a == b {
                diagnostics.push(Diagnostic::error(format!(
                    "pair force on '{}' needs two different particles",
                    a
                )));
            }
        }
    }
    for torque in &scenario.torques {
        if bodies.contains(torque.body.as_str()) {
            driven.insert(torque.body.as_str());
        } else {
            diagnostics.push(Diagnostic::error(format!(
                "torque refers to unknown rigid body '{}'",
                torque.body
            )));
        }
    }

    // Detector references
    for detector in &scenario.detectors {
        let missing = match &detector.kind {
            DetectorKind::PositionX { target }
            | DetectorKind::PositionY { target }
            | DetectorKind::VelocityX { target }
            | DetectorKind::VelocityY { target }
            | DetectorKind::Speed { target }
            | DetectorKind::KineticEnergy { target } => {
                (!particles.contains(target.as_str())).then(|| target.clone())
            }
            DetectorKind::Distance { a, b } => [a, b]
                .into_iter()
                .find(|name| !particles.contains(name.as_str()))
                .cloned(),
            DetectorKind::Angle { body } | DetectorKind::AngularVelocity { body } => {
                (!bodies.contains(body.as_str())).then(|| body.clone())
            }
            DetectorKind::Time | DetectorKind::TotalEnergy => None,
        };
        if let Some(name) = missing {
            diagnostics.push(Diagnostic::error(format!(
                "detector '{}' refers to unknown body '{}'",
                detector.name, name
            )));
        }
    }

    // Bodies nothing acts on just coast; worth a warning
    let idle_particles = scenario
        .particles
        .iter()
        .filter(|p| p.velocity == [0.0, 0.0])
        .map(|p| p.name.as_str());
    let idle_bodies = scenario
        .rigid_bodies
        .iter()
        .filter(|b| b.angular_velocity == 0.0)
        .map(|b| b.name.as_str());
    for name in idle_particles.chain(idle_bodies) {
        if !driven.contains(name) {
            diagnostics.push(Diagnostic::warning(format!(
                "'{}' has no forces applied and starts at rest",
                name
            )));
        }
    }

    diagnostics
}
