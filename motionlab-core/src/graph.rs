//! Plot buffers fed from a particle every frame
//!
//! These hold only data and axis ranges; drawing belongs to the viewer.

use crate::error::PhysicsError;
use crate::history::{BoundedSeries, PairedSeries};
use crate::particle::Particle;

/// Default point budget for a time-series graph
pub const DEFAULT_GRAPH_CAPACITY: usize = 500;
/// Default point budget for the energy graph
pub const DEFAULT_ENERGY_CAPACITY: usize = 300;

/// Auto-scaled ranges narrower than this are widened to ±0.5 about the middle
const MIN_AUTO_SPAN: f32 = 0.1;

/// Quantity sampled from a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Speed,
    VelocityX,
    VelocityY,
    PositionX,
    PositionY,
    KineticEnergy,
    /// `(x, vx)` pairs
    Phase,
}

impl GraphKind {
    pub fn label(self) -> &'static str {
        match self {
            GraphKind::Speed => "v-t",
            GraphKind::VelocityX => "vx-t",
            GraphKind::VelocityY => "vy-t",
            GraphKind::PositionX => "x-t",
            GraphKind::PositionY => "y-t",
            GraphKind::KineticEnergy => "KE-t",
            GraphKind::Phase => "phase",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub kind: GraphKind,
    pub capacity: usize,
    /// Fixed y range; `None` scales to the data
    pub range: Option<(f32, f32)>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            kind: GraphKind::Speed,
            capacity: DEFAULT_GRAPH_CAPACITY,
            range: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    values: BoundedSeries<f32>,
    phase: PairedSeries<f32, f32>,
    times: BoundedSeries<f32>,
    fixed_range: Option<(f32, f32)>,
}

impl Graph {
    pub fn new(config: GraphConfig) -> Result<Self, PhysicsError> {
        Ok(Self {
            kind: config.kind,
            values: BoundedSeries::new(config.capacity)?,
            phase: PairedSeries::new(config.capacity)?,
            times: BoundedSeries::new(config.capacity)?,
            fixed_range: config.range,
        })
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Sample `particle` according to this graph's kind
    pub fn record(&mut self, particle: &Particle) {
        let velocity = particle.velocity();
        let position = particle.position();
        let value = match self.kind {
            GraphKind::Speed => velocity.length(),
            GraphKind::VelocityX => velocity.x,
            GraphKind::VelocityY => velocity.y,
            GraphKind::PositionX => position.x,
            GraphKind::PositionY => position.y,
            GraphKind::KineticEnergy => particle.kinetic_energy(),
            GraphKind::Phase => {
                self.phase.push(position.x, velocity.x);
                self.times.push(particle.simulation_time());
                return;
            }
        };
        self.values.push(value);
        self.times.push(particle.simulation_time());
    }

    /// Manual time-series point
    pub fn add_data(&mut self, value: f32) {
        self.values.push(value);
    }

    /// Manual phase-space point
    pub fn add_phase(&mut self, position: f32, velocity: f32) {
        self.phase.push(position, velocity);
    }

    pub fn values(&self) -> &BoundedSeries<f32> {
        &self.values
    }

    pub fn phase(&self) -> &PairedSeries<f32, f32> {
        &self.phase
    }

    pub fn times(&self) -> &BoundedSeries<f32> {
        &self.times
    }

    pub fn latest(&self) -> Option<f32> {
        self.values.latest().copied()
    }

    pub fn set_range(&mut self, min: f32, max: f32) {
        self.fixed_range = Some((min, max));
    }

    pub fn enable_auto_scale(&mut self) {
        self.fixed_range = None;
    }

    /// Y range to plot the time series against
    pub fn display_range(&self) -> Option<(f32, f32)> {
        if let Some(range) = self.fixed_range {
            return Some(range);
        }
        let (min, max) = self.values.range()?;
        if max - min < MIN_AUTO_SPAN {
            let mid = (min + max) / 2.0;
            return Some((mid - 0.5, mid + 0.5));
        }
        Some((min, max))
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.phase.clear();
        self.times.clear();
    }
}

/// Kinetic, potential and total energy recorded in lockstep
#[derive(Debug, Clone)]
pub struct EnergyGraph {
    kinetic: BoundedSeries<f32>,
    potential: BoundedSeries<f32>,
    total: BoundedSeries<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReading {
    pub kinetic: f32,
    pub potential: f32,
    pub total: f32,
}

impl EnergyGraph {
    pub fn new(capacity: usize) -> Result<Self, PhysicsError> {
        Ok(Self {
            kinetic: BoundedSeries::new(capacity)?,
            potential: BoundedSeries::new(capacity)?,
            total: BoundedSeries::new(capacity)?,
        })
    }

    pub fn record(&mut self, kinetic: f32, potential: f32) {
        self.kinetic.push(kinetic);
        self.potential.push(potential);
        self.total.push(kinetic + potential);
    }

    pub fn latest(&self) -> Option<EnergyReading> {
        Some(EnergyReading {
            kinetic: *self.kinetic.latest()?,
            potential: *self.potential.latest()?,
            total: *self.total.latest()?,
        })
    }

    /// Share of the latest total that is kinetic; `None` unless total > 0
    pub fn kinetic_fraction(&self) -> Option<f32> {
        let reading = self.latest()?;
        (reading.total > 0.0).then(|| reading.kinetic / reading.total)
    }

    pub fn kinetic(&self) -> &BoundedSeries<f32> {
        &self.kinetic
    }

    pub fn potential(&self) -> &BoundedSeries<f32> {
        &self.potential
    }

    pub fn total(&self) -> &BoundedSeries<f32> {
        &self.total
    }

    pub fn len(&self) -> usize {
        self.total.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    pub fn clear(&mut self) {
        self.kinetic.clear();
        self.potential.clear();
        self.total.clear();
    }
}
