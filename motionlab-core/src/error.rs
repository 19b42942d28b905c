//! Error types for the physics core and the scenario runtime

use thiserror::Error;

/// Precondition violations raised by bodies, series and vector helpers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f32),

    #[error("moment of inertia must be positive and finite, got {0}")]
    InvalidInertia(f32),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f32),

    #[error("cannot normalize vector of magnitude {magnitude} (below {epsilon})")]
    DegenerateVector { magnitude: f32, epsilon: f32 },

    #[error("series capacity must be at least 1")]
    InvalidCapacity,

    #[error("damping factor must lie in (0, 1], got {0}")]
    InvalidDamping(f32),

    #[error("body geometry must be positive, got {width} x {height}")]
    InvalidGeometry { width: f32, height: f32 },
}

/// Errors raised while loading, checking or building a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown body '{0}'")]
    UnknownBody(String),

    #[error("invalid scenario: {0}")]
    Invalid(String),

    #[error(transparent)]
    Physics(#[from] PhysicsError),
}
