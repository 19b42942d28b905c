//! YAML scenario files
//!
//! A scenario names its bodies, the forces that act on them, the step size
//! and count, and the values to report at the end:
//!
//! ```yaml
//! name: falling ball
//! dt: 0.0166667
//! steps: 60
//! integrator: verlet        # or symplectic_euler
//! bounds:                   # optional walls
//!   min: [0.0, 0.0]
//!   max: [800.0, 600.0]
//!   restitution: 0.8
//! particles:
//!   - name: ball
//!     position: [0.0, 0.0]
//!     velocity: [0.0, 0.0]
//!     mass: 1.0
//! rigid_bodies:
//!   - name: rod
//!     center: [450.0, 275.0]
//!     mass: 5.0
//!     width: 300.0
//!     height: 40.0
//!     damping: 0.99
//! forces:
//!   - kind: gravity
//!     target: ball
//!     g: 9.8
//! torques:
//!   - body: rod
//!     point: [150.0, 0.0]
//!     force: [0.0, 10.0]
//! detectors:
//!   - name: y
//!     kind: position_y
//!     target: ball
//! ```

use crate::boundary::Bounds;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::integrator::Integrator;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: String,
    pub dt: f32,
    pub steps: u32,
    #[serde(default)]
    pub integrator: Integrator,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub particles: Vec<ParticleDecl>,
    #[serde(default)]
    pub rigid_bodies: Vec<RigidBodyDecl>,
    #[serde(default)]
    pub forces: Vec<ForceDecl>,
    #[serde(default)]
    pub torques: Vec<TorqueDecl>,
    #[serde(default)]
    pub detectors: Vec<DetectorDecl>,
}

impl ScenarioConfig {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParticleDecl {
    pub name: String,
    pub position: [f32; 2],
    #[serde(default)]
    pub velocity: [f32; 2],
    #[serde(default = "default_mass")]
    pub mass: f32,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default)]
    pub charge: f32,
    /// Overrides the scenario-wide integrator
    #[serde(default)]
    pub integrator: Option<Integrator>,
    #[serde(default = "default_capacity")]
    pub history_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RigidBodyDecl {
    pub name: String,
    pub center: [f32; 2],
    #[serde(default = "default_rod_mass")]
    pub mass: f32,
    #[serde(default = "default_rod_width")]
    pub width: f32,
    #[serde(default = "default_rod_height")]
    pub height: f32,
    #[serde(default = "default_damping")]
    pub damping: f32,
    /// Replaces the rod formula `m·w²/12`
    #[serde(default)]
    pub moment_of_inertia: Option<f32>,
    #[serde(default)]
    pub angle: f32,
    #[serde(default)]
    pub angular_velocity: f32,
    /// Overrides the scenario-wide integrator
    #[serde(default)]
    pub integrator: Option<Integrator>,
    #[serde(default = "default_capacity")]
    pub history_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForceDecl {
    Gravity {
        target: String,
        #[serde(default = "default_g")]
        g: f32,
    },
    UniformGravity {
        target: String,
        field: [f32; 2],
    },
    #[serde(alias = "damping")]
    LinearDrag {
        target: String,
        b: f32,
    },
    QuadraticDrag {
        target: String,
        c: f32,
    },
    Spring {
        target: String,
        anchor: [f32; 2],
        k: f32,
        #[serde(default)]
        rest_length: f32,
    },
    SpringBetween {
        a: String,
        b: String,
        k: f32,
        #[serde(default)]
        rest_length: f32,
    },
    Friction {
        target: String,
        mu: f32,
        normal_force: f32,
    },
    Gravitational {
        a: String,
        b: String,
        #[serde(default = "default_big_g")]
        g: f32,
    },
    Electrostatic {
        a: String,
        b: String,
        #[serde(default = "default_coulomb")]
        k: f32,
    },
    Buoyancy {
        target: String,
        density: f32,
        volume: f32,
        #[serde(default = "default_g")]
        g: f32,
    },
    Incline {
        target: String,
        /// Degrees
        angle: f32,
        #[serde(default = "default_g")]
        g: f32,
        #[serde(default)]
        mu: f32,
    },
    Restoring {
        target: String,
        equilibrium: [f32; 2],
        k: f32,
        /// Degrees
        #[serde(default)]
        angle: f32,
    },
    Lorentz {
        target: String,
        b_field: f32,
    },
}

impl ForceDecl {
    /// Particle names this force refers to
    pub fn targets(&self) -> Vec<&str> {
        match self {
            ForceDecl::Gravity { target, .. }
            | ForceDecl::UniformGravity { target, .. }
            | ForceDecl::LinearDrag { target, .. }
            | ForceDecl::QuadraticDrag { target, .. }
            | ForceDecl::Spring { target, .. }
            | ForceDecl::Friction { target, .. }
            | ForceDecl::Buoyancy { target, .. }
            | ForceDecl::Incline { target, .. }
            | ForceDecl::Restoring { target, .. }
            | ForceDecl::Lorentz { target, .. } => vec![target.as_str()],
            ForceDecl::SpringBetween { a, b, .. }
            | ForceDecl::Gravitational { a, b, .. }
            | ForceDecl::Electrostatic { a, b, .. } => vec![a.as_str(), b.as_str()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TorqueDecl {
    pub body: String,
    pub point: [f32; 2],
    pub force: [f32; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectorDecl {
    pub name: String,
    #[serde(flatten)]
    pub kind: DetectorKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetectorKind {
    PositionX { target: String },
    PositionY { target: String },
    VelocityX { target: String },
    VelocityY { target: String },
    Speed { target: String },
    KineticEnergy { target: String },
    Distance { a: String, b: String },
    Angle { body: String },
    AngularVelocity { body: String },
    /// Simulation time of the world
    Time,
    /// Kinetic plus potential energy of the whole world
    TotalEnergy,
}

fn default_mass() -> f32 {
    1.0
}

fn default_radius() -> f32 {
    10.0
}

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_rod_mass() -> f32 {
    5.0
}

fn default_rod_width() -> f32 {
    300.0
}

fn default_rod_height() -> f32 {
    40.0
}

fn default_damping() -> f32 {
    1.0
}

fn default_g() -> f32 {
    9.8
}

fn default_big_g() -> f32 {
    1.0
}

fn default_coulomb() -> f32 {
    1.0
}
