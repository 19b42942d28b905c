use crate::analyzer::analyze_scenario;
use crate::diagnostics::Diagnostics;
use crate::engine::{Force, Torque, World};
use crate::error::{PhysicsError, ScenarioError};
use crate::particle::{Particle, ParticleConfig};
use crate::rigid_body::{RigidBody, RigidBodyConfig};
use crate::scenario::{DetectorKind, ForceDecl, ScenarioConfig};
use glam::Vec2;
use log::{debug, info};
use std::path::Path;

/// Value of one detector at the end of a run
#[derive(Debug, Clone)]
pub struct DetectorResult {
    pub name: String,
    pub value: f32,
}

/// Final result of running a scenario
#[derive(Debug)]
pub struct SimulationResult {
    pub detectors: Vec<DetectorResult>,
}

/// A built world plus the stepping schedule from its scenario
#[derive(Debug)]
pub struct SimulationContext {
    pub world: World,
    pub scenario: ScenarioConfig,
    pub dt: f32,
    pub max_steps: u32,
    pub current_step: u32,
}

/// Read-only snapshot of a particle for display
#[derive(Debug, Clone)]
pub struct ParticleState {
    pub name: String,
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    pub radius: f32,
}

/// Parse, build and run a scenario to completion
pub fn run_scenario(source: &str) -> Result<SimulationResult, ScenarioError> {
    let (mut ctx, _diagnostics) = build_simulation_context_from_source(source)?;
    while !step_simulation(&mut ctx)? {}
    let detectors = evaluate_detectors(&ctx.scenario, &ctx.world)?;
    info!(
        "scenario '{}' finished after {} steps",
        ctx.scenario.name, ctx.current_step
    );
    Ok(SimulationResult { detectors })
}

pub fn run_scenario_file(path: impl AsRef<Path>) -> Result<SimulationResult, ScenarioError> {
    let source = std::fs::read_to_string(path)?;
    run_scenario(&source)
}

pub fn load_scenario(source: &str) -> Result<ScenarioConfig, ScenarioError> {
    Ok(ScenarioConfig::from_yaml(source)?)
}

pub fn build_simulation_context_from_source(
    source: &str,
) -> Result<(SimulationContext, Diagnostics), ScenarioError> {
    build_simulation_context(load_scenario(source)?)
}

/// Check and build a scenario; analyzer errors abort, warnings are returned
pub fn build_simulation_context(
    scenario: ScenarioConfig,
) -> Result<(SimulationContext, Diagnostics), ScenarioError> {
    let diagnostics = analyze_scenario(&scenario);
    if diagnostics.has_errors() {
        return Err(ScenarioError::Invalid(diagnostics.error_summary()));
    }
    let world = build_world(&scenario)?;
    let ctx = SimulationContext {
        world,
        dt: scenario.dt,
        max_steps: scenario.steps,
        current_step: 0,
        scenario,
    };
    Ok((ctx, diagnostics))
}

/// Advance one step; returns `true` once the scenario's step count is reached
pub fn step_simulation(ctx: &mut SimulationContext) -> Result<bool, PhysicsError> {
    if ctx.current_step >= ctx.max_steps {
        return Ok(true);
    }
    ctx.world.step(ctx.dt)?;
    ctx.current_step += 1;
    Ok(ctx.current_step >= ctx.max_steps)
}

pub fn get_particle_states(ctx: &SimulationContext) -> Vec<ParticleState> {
    ctx.world
        .particles
        .iter()
        .zip(&ctx.world.particle_names)
        .map(|(p, name)| ParticleState {
            name: name.clone(),
            pos: p.position(),
            vel: p.velocity(),
            mass: p.mass(),
            radius: p.radius(),
        })
        .collect()
}

/// Build a World from a scenario
pub fn build_world(scenario: &ScenarioConfig) -> Result<World, ScenarioError> {
    let mut world = World::new();
    world.bounds = scenario.bounds;

    for decl in &scenario.particles {
        let config = ParticleConfig {
            mass: decl.mass,
            radius: decl.radius,
            charge: decl.charge,
            integrator: decl.integrator.unwrap_or(scenario.integrator),
            history_capacity: decl.history_capacity,
        };
        let particle = Particle::new(Vec2::from(decl.position), Vec2::from(decl.velocity), config)?;
        world.add_particle(decl.name.clone(), particle);
    }

    for decl in &scenario.rigid_bodies {
        let center = Vec2::from(decl.center);
        let integrator = decl.integrator.unwrap_or(scenario.integrator);
        let mut body = match decl.moment_of_inertia {
            Some(inertia) => {
                RigidBody::with_inertia(center, inertia, decl.damping, decl.history_capacity)?
            }
            None => RigidBody::new(
                center,
                RigidBodyConfig {
                    mass: decl.mass,
                    width: decl.width,
                    height: decl.height,
                    damping: decl.damping,
                    integrator,
                    history_capacity: decl.history_capacity,
                },
            )?,
        };
        body.set_integrator(integrator);
        body.reset(decl.angle, decl.angular_velocity);
        world.add_rigid_body(decl.name.clone(), body);
    }

    let particle = |name: &str| {
        world
            .particle_index(name)
            .ok_or_else(|| ScenarioError::UnknownBody(name.to_string()))
    };

    let mut forces = Vec::with_capacity(scenario.forces.len());
    for decl in &scenario.forces {
        let force = match decl {
            ForceDecl::Gravity { target, g } => Force::Gravity {
                target: particle(target)?,
                g: *g,
            },
            ForceDecl::UniformGravity { target, field } => Force::UniformGravity {
                target: particle(target)?,
                field: Vec2::from(*field),
            },
            ForceDecl::LinearDrag { target, b } => Force::LinearDrag {
                target: particle(target)?,
                b: *b,
            },
            ForceDecl::QuadraticDrag { target, c } => Force::QuadraticDrag {
                target: particle(target)?,
                c: *c,
            },
            ForceDecl::Spring {
                target,
                anchor,
                k,
                rest_length,
            } => Force::Spring {
                target: particle(target)?,
                anchor: Vec2::from(*anchor),
                k: *k,
                rest: *rest_length,
            },
            ForceDecl::SpringBetween { a, b, k, rest_length } => Force::SpringBetween {
                a: particle(a)?,
                b: particle(b)?,
                k: *k,
                rest: *rest_length,
            },
            ForceDecl::Friction {
                target,
                mu,
                normal_force,
            } => Force::Friction {
                target: particle(target)?,
                mu: *mu,
                normal_force: *normal_force,
            },
            ForceDecl::Gravitational { a, b, g } => Force::Gravitational {
                a: particle(a)?,
                b: particle(b)?,
                g: *g,
            },
            ForceDecl::Electrostatic { a, b, k } => Force::Electrostatic {
                a: particle(a)?,
                b: particle(b)?,
                k: *k,
            },
            ForceDecl::Buoyancy {
                target,
                density,
                volume,
                g,
            } => Force::Buoyancy {
                target: particle(target)?,
                density: *density,
                volume: *volume,
                g: *g,
            },
            ForceDecl::Incline { target, angle, g, mu } => Force::Incline {
                target: particle(target)?,
                angle: angle.to_radians(),
                g: *g,
                mu: *mu,
            },
            ForceDecl::Restoring {
                target,
                equilibrium,
                k,
                angle,
            } => Force::Restoring {
                target: particle(target)?,
                equilibrium: Vec2::from(*equilibrium),
                k: *k,
                angle: angle.to_radians(),
            },
            ForceDecl::Lorentz { target, b_field } => Force::Lorentz {
                target: particle(target)?,
                b_field: *b_field,
            },
        };
        forces.push(force);
    }
    world.forces = forces;

    for decl in &scenario.torques {
        let body = world
            .rigid_body_index(&decl.body)
            .ok_or_else(|| ScenarioError::UnknownBody(decl.body.clone()))?;
        world.torques.push(Torque {
            body,
            point: Vec2::from(decl.point),
            force: Vec2::from(decl.force),
        });
    }

    debug!(
        "built world: {} particles, {} rigid bodies, {} forces, {} torques",
        world.particles.len(),
        world.rigid_bodies.len(),
        world.forces.len(),
        world.torques.len()
    );
    Ok(world)
}

/// Evaluate all detectors on the current world state
pub fn evaluate_detectors(
    scenario: &ScenarioConfig,
    world: &World,
) -> Result<Vec<DetectorResult>, ScenarioError> {
    let particle = |name: &str| {
        world
            .particle_index(name)
            .map(|idx| &world.particles[idx])
            .ok_or_else(|| ScenarioError::UnknownBody(name.to_string()))
    };
    let body = |name: &str| {
        world
            .rigid_body_index(name)
            .map(|idx| &world.rigid_bodies[idx])
            .ok_or_else(|| ScenarioError::UnknownBody(name.to_string()))
    };

    let mut results = Vec::with_capacity(scenario.detectors.len());
    for detector in &scenario.detectors {
        let value = match &detector.kind {
            DetectorKind::PositionX { target } => particle(target)?.position().x,
            DetectorKind::PositionY { target } => particle(target)?.position().y,
            DetectorKind::VelocityX { target } => particle(target)?.velocity().x,
            DetectorKind::VelocityY { target } => particle(target)?.velocity().y,
            DetectorKind::Speed { target } => particle(target)?.speed(),
            DetectorKind::KineticEnergy { target } => particle(target)?.kinetic_energy(),
            DetectorKind::Distance { a, b } => {
                particle(a)?.position().distance(particle(b)?.position())
            }
            DetectorKind::Angle { body: name } => body(name)?.angle(),
            DetectorKind::AngularVelocity { body: name } => body(name)?.angular_velocity(),
            DetectorKind::Time => world_time(world),
            DetectorKind::TotalEnergy => world.total_energy(),
        };
        results.push(DetectorResult {
            name: detector.name.clone(),
            value,
        });
    }
    Ok(results)
}

fn world_time(world: &World) -> f32 {
    world
        .particles
        .first()
        .map(Particle::simulation_time)
        .or_else(|| world.rigid_bodies.first().map(RigidBody::simulation_time))
        .unwrap_or(0.0)
}
