use crate::error::PhysicsError;
use crate::history::{BoundedSeries, DEFAULT_HISTORY_CAPACITY};
use crate::integrator::{Integrator, Kinematics};
use glam::Vec2;
use log::{debug, trace};

/// Construction options for a [`Particle`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub mass: f32,
    pub radius: f32,
    pub charge: f32,
    pub integrator: Integrator,
    pub history_capacity: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            radius: 10.0,
            charge: 0.0,
            integrator: Integrator::Verlet,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// One recorded integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSample {
    pub time: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub kinetic_energy: f32,
}

/// A point mass driven by externally applied forces
///
/// Per frame the driver calls [`apply_force`](Self::apply_force) any number
/// of times and then [`update`](Self::update) exactly once.
#[derive(Debug, Clone)]
pub struct Particle {
    kinematics: Kinematics<Vec2>,
    mass: f32,
    radius: f32,
    charge: f32,
    integrator: Integrator,
    simulation_time: f32,
    history: BoundedSeries<ParticleSample>,
}

pub(crate) fn validate_mass(mass: f32) -> Result<(), PhysicsError> {
    if mass > 0.0 && mass.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass(mass))
    }
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, config: ParticleConfig) -> Result<Self, PhysicsError> {
        validate_mass(config.mass)?;
        let history = BoundedSeries::new(config.history_capacity)?;
        debug!(
            "particle at ({}, {}) mass {} using {:?}",
            position.x, position.y, config.mass, config.integrator
        );
        Ok(Self {
            kinematics: Kinematics::new(position, velocity),
            mass: config.mass,
            radius: config.radius,
            charge: config.charge,
            integrator: config.integrator,
            simulation_time: 0.0,
            history,
        })
    }

    /// Add `force / mass` to this step's acceleration
    pub fn apply_force(&mut self, force: Vec2) -> Result<(), PhysicsError> {
        validate_mass(self.mass)?;
        self.kinematics.accumulate(force / self.mass);
        Ok(())
    }

    /// Integrate one step of `dt`, record a sample and clear the accumulator
    pub fn update(&mut self, dt: f32) -> Result<(), PhysicsError> {
        let acceleration = self.kinematics.step(self.integrator, dt)?;
        self.simulation_time += dt;
        trace!(
            "t={:.4} pos={:?} vel={:?} acc={:?}",
            self.simulation_time,
            self.position(),
            self.velocity(),
            acceleration
        );
        self.history.push(ParticleSample {
            time: self.simulation_time,
            position: self.position(),
            velocity: self.velocity(),
            kinetic_energy: self.kinetic_energy(),
        });
        Ok(())
    }

    /// Restart from the given state; mass, radius and charge are kept
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        self.kinematics.reset(position, velocity);
        self.simulation_time = 0.0;
        self.history.clear();
        debug!("particle reset to ({}, {})", position.x, position.y);
    }

    pub fn position(&self) -> Vec2 {
        self.kinematics.coordinate()
    }

    pub fn velocity(&self) -> Vec2 {
        self.kinematics.velocity()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.kinematics.set_coordinate(position);
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.kinematics.set_velocity(velocity);
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn charge(&self) -> f32 {
        self.charge
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn set_integrator(&mut self, integrator: Integrator) {
        self.integrator = integrator;
    }

    /// Acceleration applied so far in the current step
    pub fn accumulated_acceleration(&self) -> Vec2 {
        self.kinematics.accumulated()
    }

    /// Acceleration integrated by the last `update`; zero before the first
    pub fn previous_acceleration(&self) -> Vec2 {
        self.kinematics.previous_acceleration()
    }

    pub fn simulation_time(&self) -> f32 {
        self.simulation_time
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity().length_squared()
    }

    pub fn speed(&self) -> f32 {
        self.velocity().length()
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity() * self.mass
    }

    pub fn history(&self) -> &BoundedSeries<ParticleSample> {
        &self.history
    }
}
