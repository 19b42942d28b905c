use crate::boundary::Bounds;
use crate::error::PhysicsError;
use crate::forces::{self, clamp_distance};
use crate::integrator::validate_time_step;
use crate::particle::Particle;
use crate::rigid_body::RigidBody;
use crate::vector::NORMALIZE_EPSILON;
use glam::Vec2;
use log::warn;

/// A force source bound to particles by index
#[derive(Debug, Clone, PartialEq)]
pub enum Force {
    Gravity {
        target: usize,
        g: f32,
    },
    UniformGravity {
        target: usize,
        field: Vec2,
    },
    LinearDrag {
        target: usize,
        b: f32,
    },
    QuadraticDrag {
        target: usize,
        c: f32,
    },
    /// Spring to a fixed anchor point
    Spring {
        target: usize,
        anchor: Vec2,
        k: f32,
        rest: f32,
    },
    SpringBetween {
        a: usize,
        b: usize,
        k: f32,
        rest: f32,
    },
    Friction {
        target: usize,
        mu: f32,
        normal_force: f32,
    },
    Gravitational {
        a: usize,
        b: usize,
        g: f32,
    },
    /// Charges are taken from the particles
    Electrostatic {
        a: usize,
        b: usize,
        k: f32,
    },
    Buoyancy {
        target: usize,
        density: f32,
        volume: f32,
        g: f32,
    },
    Incline {
        target: usize,
        angle: f32,
        g: f32,
        mu: f32,
    },
    /// Restoring force toward `equilibrium` along direction `angle`
    Restoring {
        target: usize,
        equilibrium: Vec2,
        k: f32,
        angle: f32,
    },
    /// Field strength `b_field` out of the plane; charge from the particle
    Lorentz {
        target: usize,
        b_field: f32,
    },
}

/// Constant force applied at a point in a rigid body's own frame
#[derive(Debug, Clone, PartialEq)]
pub struct Torque {
    pub body: usize,
    pub point: Vec2,
    pub force: Vec2,
}

/// Bodies plus the forces that drive them
///
/// Each `step` evaluates every force from the same snapshot of state,
/// applies all of them, and only then integrates, so coupled bodies never
/// see a half-updated partner.
#[derive(Debug, Default)]
pub struct World {
    pub particles: Vec<Particle>,
    pub particle_names: Vec<String>,
    pub rigid_bodies: Vec<RigidBody>,
    pub rigid_body_names: Vec<String>,
    pub forces: Vec<Force>,
    pub torques: Vec<Torque>,
    pub bounds: Option<Bounds>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_particle(&mut self, name: impl Into<String>, particle: Particle) -> usize {
        self.particles.push(particle);
        self.particle_names.push(name.into());
        self.particles.len() - 1
    }

    pub fn add_rigid_body(&mut self, name: impl Into<String>, body: RigidBody) -> usize {
        self.rigid_bodies.push(body);
        self.rigid_body_names.push(name.into());
        self.rigid_bodies.len() - 1
    }

    pub fn particle_index(&self, name: &str) -> Option<usize> {
        self.particle_names.iter().position(|n| n == name)
    }

    pub fn rigid_body_index(&self, name: &str) -> Option<usize> {
        self.rigid_body_names.iter().position(|n| n == name)
    }

    /// Net force on every particle for the current state
    pub fn compute_forces(&self) -> Vec<Vec2> {
        let mut net = vec![Vec2::ZERO; self.particles.len()];

        for force in &self.forces {
            match *force {
                Force::Gravity { target, g } => {
                    net[target] += forces::gravity(self.particles[target].mass(), g);
                }
                Force::UniformGravity { target, field } => {
                    net[target] += forces::uniform_gravity(field.x, field.y);
                }
                Force::LinearDrag { target, b } => {
                    net[target] += forces::linear_drag(self.particles[target].velocity(), b);
                }
                Force::QuadraticDrag { target, c } => {
                    net[target] += forces::quadratic_drag(self.particles[target].velocity(), c);
                }
                Force::Spring { target, anchor, k, rest } => {
                    let position = self.particles[target].position();
                    if position.distance(anchor) < NORMALIZE_EPSILON {
                        warn!("particle '{}' sits on its spring anchor", self.particle_names[target]);
                    }
                    net[target] += forces::spring(position, anchor, k, rest);
                }
                Force::SpringBetween { a, b, k, rest } => {
                    let f = forces::spring_between(
                        self.particles[a].position(),
                        self.particles[b].position(),
                        k,
                        rest,
                    );
                    net[a] += f;
                    net[b] -= f;
                }
                Force::Friction { target, mu, normal_force } => {
                    net[target] +=
                        forces::kinetic_friction(self.particles[target].velocity(), mu, normal_force);
                }
                Force::Gravitational { a, b, g } => {
                    let (pa, pb) = (&self.particles[a], &self.particles[b]);
                    let f = forces::gravitational(pa.position(), pa.mass(), pb.position(), pb.mass(), g);
                    net[a] += f;
                    net[b] -= f;
                }
                Force::Electrostatic { a, b, k } => {
                    let (pa, pb) = (&self.particles[a], &self.particles[b]);
                    let f = forces::electrostatic(pa.position(), pa.charge(), pb.position(), pb.charge(), k);
                    net[a] += f;
                    net[b] -= f;
                }
                Force::Buoyancy { target, density, volume, g } => {
                    net[target] += forces::buoyancy(density, volume, g);
                }
                Force::Incline { target, angle, g, mu } => {
                    net[target] += forces::incline(self.particles[target].mass(), angle, g, mu).net_force;
                }
                Force::Restoring { target, equilibrium, k, angle } => {
                    let direction = Vec2::from_angle(angle);
                    let displacement = (self.particles[target].position() - equilibrium).dot(direction);
                    net[target] += forces::restoring(displacement, k, angle);
                }
                Force::Lorentz { target, b_field } => {
                    let p = &self.particles[target];
                    net[target] += forces::lorentz(p.velocity(), p.charge(), b_field);
                }
            }
        }

        net
    }

    /// Potential energy stored in the conservative forces
    pub fn potential_energy(&self) -> f32 {
        let mut total = 0.0;
        for force in &self.forces {
            total += match *force {
                // +y is down, so height is -y
                Force::Gravity { target, g } => {
                    let p = &self.particles[target];
                    -p.mass() * g * p.position().y
                }
                Force::UniformGravity { target, field } => {
                    let p = &self.particles[target];
                    -field.dot(p.position())
                }
                Force::Spring { target, anchor, k, rest } => {
                    let stretch = self.particles[target].position().distance(anchor) - rest;
                    0.5 * k * stretch * stretch
                }
                Force::SpringBetween { a, b, k, rest } => {
                    let stretch = self.particles[a].position().distance(self.particles[b].position()) - rest;
                    0.5 * k * stretch * stretch
                }
                Force::Gravitational { a, b, g } => {
                    let (pa, pb) = (&self.particles[a], &self.particles[b]);
                    -g * pa.mass() * pb.mass() / clamp_distance(pa.position().distance(pb.position()))
                }
                Force::Electrostatic { a, b, k } => {
                    let (pa, pb) = (&self.particles[a], &self.particles[b]);
                    k * pa.charge() * pb.charge() / clamp_distance(pa.position().distance(pb.position()))
                }
                Force::Restoring { target, equilibrium, k, angle } => {
                    let x = (self.particles[target].position() - equilibrium).dot(Vec2::from_angle(angle));
                    0.5 * k * x * x
                }
                // Constant forces: U = -F·x
                Force::Buoyancy { target, density, volume, g } => {
                    -forces::buoyancy(density, volume, g).dot(self.particles[target].position())
                }
                Force::Incline { target, angle, g, mu } => {
                    let p = &self.particles[target];
                    -forces::incline(p.mass(), angle, g, mu).net_force.dot(p.position())
                }
                _ => 0.0,
            };
        }
        total
    }

    pub fn kinetic_energy(&self) -> f32 {
        let linear: f32 = self.particles.iter().map(Particle::kinetic_energy).sum();
        let angular: f32 = self
            .rigid_bodies
            .iter()
            .map(RigidBody::rotational_kinetic_energy)
            .sum();
        linear + angular
    }

    pub fn total_energy(&self) -> f32 {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Advance every body by `dt`
    pub fn step(&mut self, dt: f32) -> Result<(), PhysicsError> {
        // Reject before any accumulator is touched
        validate_time_step(dt)?;
        let net = self.compute_forces();
        for (particle, force) in self.particles.iter_mut().zip(net) {
            particle.apply_force(force)?;
        }
        for torque in &self.torques {
            self.rigid_bodies[torque.body].apply_force_at(torque.point, torque.force)?;
        }

        for particle in self.particles.iter_mut() {
            particle.update(dt)?;
            if let Some(bounds) = &self.bounds {
                bounds.reflect(particle);
            }
        }
        for body in self.rigid_bodies.iter_mut() {
            body.update(dt)?;
        }
        Ok(())
    }
}
