pub mod analyzer;
pub mod boundary;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod forces;
pub mod graph;
pub mod history;
pub mod integrator;
pub mod particle;
pub mod rigid_body;
pub mod runtime;
pub mod scenario;
pub mod systems;
pub mod vector;

pub use analyzer::analyze_scenario;
pub use boundary::Bounds;
pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics};
pub use engine::{Force, Torque, World};
pub use error::{PhysicsError, ScenarioError};
pub use graph::{EnergyGraph, Graph, GraphConfig, GraphKind};
pub use history::{BoundedSeries, PairedSeries};
pub use integrator::Integrator;
pub use particle::{Particle, ParticleConfig, ParticleSample};
pub use rigid_body::{RigidBody, RigidBodyConfig, RigidSample};
pub use runtime::{
    build_simulation_context, build_simulation_context_from_source, get_particle_states,
    run_scenario, run_scenario_file, step_simulation, DetectorResult, ParticleState,
    SimulationContext, SimulationResult,
};
pub use scenario::ScenarioConfig;
pub use vector::{Vector2, VectorExt};
