//! Fixed-step time integration shared by particles and rigid bodies
//!
//! `Kinematics<T>` carries one generalized coordinate (a `Vec2` position or
//! an `f32` angle), its velocity, the per-step acceleration accumulator and
//! the acceleration of the previous step.

use crate::error::PhysicsError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// Integration scheme, selectable per body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// Velocity Verlet: second order, bounded energy error
    #[default]
    Verlet,
    /// Semi-implicit Euler: velocity first, then position with the new velocity
    SymplecticEuler,
}

/// Anything that can be integrated: `f32` angles and `Vec2` positions
pub trait Coordinate:
    Copy
    + Default
    + PartialEq
    + std::fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f32, Output = Self>
    + AddAssign
{
}

impl Coordinate for f32 {}
impl Coordinate for Vec2 {}

pub fn validate_time_step(dt: f32) -> Result<(), PhysicsError> {
    if dt > 0.0 && dt.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidTimeStep(dt))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Kinematics<T> {
    coordinate: T,
    velocity: T,
    accumulator: T,
    previous_acceleration: T,
    // Weight (`dt / 2`, times any damping since) still owed to the last
    // Verlet step's velocity once the acceleration at its endpoint is known.
    pending_weight: Option<f32>,
}

impl<T: Coordinate> Kinematics<T> {
    pub fn new(coordinate: T, velocity: T) -> Self {
        Self {
            coordinate,
            velocity,
            accumulator: T::default(),
            previous_acceleration: T::default(),
            pending_weight: None,
        }
    }

    pub fn coordinate(&self) -> T {
        self.coordinate
    }

    pub fn velocity(&self) -> T {
        self.velocity
    }

    pub fn accumulated(&self) -> T {
        self.accumulator
    }

    pub fn previous_acceleration(&self) -> T {
        self.previous_acceleration
    }

    pub fn set_coordinate(&mut self, coordinate: T) {
        self.coordinate = coordinate;
    }

    /// Overwrite the velocity from outside the integrator (e.g. a wall
    /// bounce). The new value is taken as exact, so no correction is owed.
    pub fn set_velocity(&mut self, velocity: T) {
        self.velocity = velocity;
        self.pending_weight = None;
    }

    /// Scale the velocity, including the part a pending Verlet
    /// correction will still add
    pub fn scale_velocity(&mut self, factor: f32) {
        self.velocity = self.velocity * factor;
        if let Some(weight) = self.pending_weight.as_mut() {
            *weight *= factor;
        }
    }

    /// Add an acceleration contribution for the current step
    pub fn accumulate(&mut self, acceleration: T) {
        self.accumulator += acceleration;
    }

    /// Advance one step and return the acceleration that was integrated
    pub fn step(&mut self, scheme: Integrator, dt: f32) -> Result<T, PhysicsError> {
        validate_time_step(dt)?;
        let acceleration = self.accumulator;

        // A previous Verlet step reported v + a_prev·dt; complete its average
        // now that the acceleration at its endpoint is known, whichever
        // scheme runs next.
        if let Some(weight) = self.pending_weight.take() {
            self.velocity += (acceleration - self.previous_acceleration) * weight;
        }

        match scheme {
            Integrator::Verlet => {
                self.coordinate += self.velocity * dt + acceleration * (0.5 * dt * dt);
                self.velocity += acceleration * dt;
                self.pending_weight = Some(0.5 * dt);
            }
            Integrator::SymplecticEuler => {
                self.velocity += acceleration * dt;
                self.coordinate += self.velocity * dt;
            }
        }

        self.previous_acceleration = acceleration;
        self.accumulator = T::default();
        Ok(acceleration)
    }

    pub fn reset(&mut self, coordinate: T, velocity: T) {
        *self = Self::new(coordinate, velocity);
    }
}
