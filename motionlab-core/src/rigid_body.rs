//! Rotating rod about a fixed center
//!
//! Same integration pattern as [`Particle`](crate::particle::Particle) but on
//! angle / angular velocity, with a multiplicative damping factor applied to
//! the angular velocity after every step.

use crate::error::PhysicsError;
use crate::forces;
use crate::history::{BoundedSeries, DEFAULT_HISTORY_CAPACITY};
use crate::integrator::{Integrator, Kinematics};
use crate::particle::validate_mass;
use crate::vector::VectorExt;
use glam::Vec2;
use log::{debug, trace};

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBodyConfig {
    pub mass: f32,
    pub width: f32,
    pub height: f32,
    /// Angular velocity multiplier per step, in (0, 1]; 1 means undamped
    pub damping: f32,
    pub integrator: Integrator,
    pub history_capacity: usize,
}

impl Default for RigidBodyConfig {
    fn default() -> Self {
        Self {
            mass: 5.0,
            width: 300.0,
            height: 40.0,
            damping: 1.0,
            integrator: Integrator::Verlet,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidSample {
    pub time: f32,
    pub angle: f32,
    pub angular_velocity: f32,
    pub angular_acceleration: f32,
    pub torque: f32,
    pub kinetic_energy: f32,
}

/// Moment of inertia of a thin rod about its center, `m·L²/12`
pub fn rod_moment_of_inertia(mass: f32, length: f32) -> f32 {
    mass * length * length / 12.0
}

#[derive(Debug, Clone)]
pub struct RigidBody {
    center: Vec2,
    width: f32,
    height: f32,
    moment_of_inertia: f32,
    damping: f32,
    integrator: Integrator,
    kinematics: Kinematics<f32>,
    simulation_time: f32,
    history: BoundedSeries<RigidSample>,
}

fn validate_inertia(inertia: f32) -> Result<(), PhysicsError> {
    if inertia > 0.0 && inertia.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidInertia(inertia))
    }
}

fn validate_damping(damping: f32) -> Result<(), PhysicsError> {
    if damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidDamping(damping))
    }
}

impl RigidBody {
    /// Rod of `config.width` x `config.height` rotating about `center`
    pub fn new(center: Vec2, config: RigidBodyConfig) -> Result<Self, PhysicsError> {
        validate_mass(config.mass)?;
        if !(config.width > 0.0 && config.height > 0.0) {
            return Err(PhysicsError::InvalidGeometry {
                width: config.width,
                height: config.height,
            });
        }
        let inertia = rod_moment_of_inertia(config.mass, config.width);
        let mut body = Self::with_inertia(center, inertia, config.damping, config.history_capacity)?;
        body.width = config.width;
        body.height = config.height;
        body.integrator = config.integrator;
        Ok(body)
    }

    /// Body with an explicit moment of inertia and no hit-test geometry
    pub fn with_inertia(
        center: Vec2,
        moment_of_inertia: f32,
        damping: f32,
        history_capacity: usize,
    ) -> Result<Self, PhysicsError> {
        validate_inertia(moment_of_inertia)?;
        validate_damping(damping)?;
        debug!(
            "rigid body at ({}, {}) with I = {}",
            center.x, center.y, moment_of_inertia
        );
        Ok(Self {
            center,
            width: 0.0,
            height: 0.0,
            moment_of_inertia,
            damping,
            integrator: Integrator::Verlet,
            kinematics: Kinematics::new(0.0, 0.0),
            simulation_time: 0.0,
            history: BoundedSeries::new(history_capacity)?,
        })
    }

    /// Add `τ / I` to this step's angular acceleration
    pub fn apply_torque(&mut self, torque: f32) -> Result<(), PhysicsError> {
        validate_inertia(self.moment_of_inertia)?;
        self.kinematics.accumulate(torque / self.moment_of_inertia);
        Ok(())
    }

    /// Apply `force` (world frame) at `local_point` (body frame) and return
    /// the resulting torque `r × F`
    pub fn apply_force_at(&mut self, local_point: Vec2, force: Vec2) -> Result<f32, PhysicsError> {
        let lever_arm = local_point.rotated(self.angle());
        let torque = forces::torque(lever_arm, force);
        self.apply_torque(torque)?;
        Ok(torque)
    }

    pub fn update(&mut self, dt: f32) -> Result<(), PhysicsError> {
        let angular_acceleration = self.kinematics.step(self.integrator, dt)?;
        self.kinematics.scale_velocity(self.damping);
        self.simulation_time += dt;
        trace!(
            "t={:.4} angle={} omega={} alpha={}",
            self.simulation_time,
            self.angle(),
            self.angular_velocity(),
            angular_acceleration
        );
        self.history.push(RigidSample {
            time: self.simulation_time,
            angle: self.angle(),
            angular_velocity: self.angular_velocity(),
            angular_acceleration,
            torque: angular_acceleration * self.moment_of_inertia,
            kinetic_energy: self.rotational_kinetic_energy(),
        });
        Ok(())
    }

    pub fn reset(&mut self, angle: f32, angular_velocity: f32) {
        self.kinematics.reset(angle, angular_velocity);
        self.simulation_time = 0.0;
        self.history.clear();
        debug!("rigid body reset to angle {}", angle);
    }

    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        self.center + local.rotated(self.angle())
    }

    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        (world - self.center).rotated(-self.angle())
    }

    /// Whether `world` lies on the rod, with `margin` of slack on every side
    pub fn contains(&self, world: Vec2, margin: f32) -> bool {
        let local = self.world_to_local(world);
        local.x.abs() < self.width / 2.0 + margin && local.y.abs() < self.height / 2.0 + margin
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn angle(&self) -> f32 {
        self.kinematics.coordinate()
    }

    pub fn angular_velocity(&self) -> f32 {
        self.kinematics.velocity()
    }

    pub fn accumulated_angular_acceleration(&self) -> f32 {
        self.kinematics.accumulated()
    }

    pub fn previous_angular_acceleration(&self) -> f32 {
        self.kinematics.previous_acceleration()
    }

    pub fn moment_of_inertia(&self) -> f32 {
        self.moment_of_inertia
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn set_integrator(&mut self, integrator: Integrator) {
        self.integrator = integrator;
    }

    pub fn simulation_time(&self) -> f32 {
        self.simulation_time
    }

    pub fn rotational_kinetic_energy(&self) -> f32 {
        0.5 * self.moment_of_inertia * self.angular_velocity() * self.angular_velocity()
    }

    pub fn history(&self) -> &BoundedSeries<RigidSample> {
        &self.history
    }
}
