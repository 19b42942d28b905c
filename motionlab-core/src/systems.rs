//! Closed-form connected-mass systems
//!
//! These are the fixed configurations from the incline and pulley demos.
//! Each one has a known constant acceleration, so the kinematics are exact
//! functions of time rather than integrated. There is no general constraint
//! solver here.

use crate::error::PhysicsError;
use crate::particle::validate_mass;

/// Block A on a frictionless incline tied over a pulley to hanging block B
///
/// Positive acceleration means B descends and A moves up the slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclinePulley {
    mass_incline: f32,
    mass_hanging: f32,
    angle: f32,
    g: f32,
}

impl InclinePulley {
    pub fn new(mass_incline: f32, mass_hanging: f32, angle: f32, g: f32) -> Result<Self, PhysicsError> {
        validate_mass(mass_incline)?;
        validate_mass(mass_hanging)?;
        Ok(Self {
            mass_incline,
            mass_hanging,
            angle,
            g,
        })
    }

    /// `g·(m_B − m_A·sin θ) / (m_A + m_B)`
    pub fn acceleration(&self) -> f32 {
        self.g * (self.mass_hanging - self.mass_incline * self.angle.sin())
            / (self.mass_incline + self.mass_hanging)
    }

    /// Rope tension `m_A·(g·sin θ + a)`
    pub fn tension(&self) -> f32 {
        self.mass_incline * (self.g * self.angle.sin() + self.acceleration())
    }

    /// Distance travelled from rest after `t` seconds
    pub fn displacement(&self, t: f32) -> f32 {
        0.5 * self.acceleration() * t * t
    }

    pub fn velocity(&self, t: f32) -> f32 {
        self.acceleration() * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulleyMode {
    /// All four blocks move together
    Connected,
    /// The rope to block B is cut; B slides on its own
    Disconnected,
}

/// Four blocks over two pulleys with a 2/5 slope
///
/// Masses are fixed multiples of `m`: A = 5m hanging, B = C = 30m/11 on the
/// slope, D = m hanging on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourMassPulley {
    m: f32,
    g: f32,
    pub mode: PulleyMode,
}

pub const FOUR_MASS_SLOPE_SIN: f32 = 2.0 / 5.0;

impl FourMassPulley {
    pub fn new(m: f32, g: f32, mode: PulleyMode) -> Result<Self, PhysicsError> {
        validate_mass(m)?;
        Ok(Self { m, g, mode })
    }

    pub fn mass_a(&self) -> f32 {
        5.0 * self.m
    }

    pub fn mass_b(&self) -> f32 {
        30.0 * self.m / 11.0
    }

    pub fn mass_c(&self) -> f32 {
        self.mass_b()
    }

    pub fn mass_d(&self) -> f32 {
        self.m
    }

    /// Acceleration of the chain containing A, C and D
    pub fn acceleration(&self) -> f32 {
        let (a, b, c, d) = (self.mass_a(), self.mass_b(), self.mass_c(), self.mass_d());
        let g = self.g;
        let s = FOUR_MASS_SLOPE_SIN;
        match self.mode {
            PulleyMode::Connected => (a * g - (b + c) * g * s - d * g) / (a + b + c + d),
            PulleyMode::Disconnected => (a * g - c * g * s - d * g) / (a + c + d),
        }
    }

    /// Acceleration of block B
    pub fn acceleration_b(&self) -> f32 {
        match self.mode {
            PulleyMode::Connected => self.acceleration(),
            PulleyMode::Disconnected => self.g * FOUR_MASS_SLOPE_SIN,
        }
    }

    /// Tension in the rope holding B; zero once it is cut
    pub fn tension_b(&self) -> f32 {
        match self.mode {
            PulleyMode::Connected => self.mass_b() * (self.g * FOUR_MASS_SLOPE_SIN + self.acceleration()),
            PulleyMode::Disconnected => 0.0,
        }
    }

    pub fn displacement(&self, t: f32) -> f32 {
        0.5 * self.acceleration() * t * t
    }
}
