//! Axis-aligned walls that bounce particles back inside

use crate::particle::Particle;
use glam::Vec2;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    pub min: [f32; 2],
    pub max: [f32; 2],
    /// Fraction of the normal velocity kept after a bounce
    #[serde(default = "default_restitution")]
    pub restitution: f32,
}

fn default_restitution() -> f32 {
    0.8
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2, restitution: f32) -> Self {
        Self {
            min: min.to_array(),
            max: max.to_array(),
            restitution,
        }
    }

    /// Push `particle` back inside, inset by its radius, and reflect the
    /// velocity component that carried it out. Returns whether it bounced.
    pub fn reflect(&self, particle: &mut Particle) -> bool {
        let radius = particle.radius();
        let lo = Vec2::from(self.min) + Vec2::splat(radius);
        let hi = Vec2::from(self.max) - Vec2::splat(radius);
        let mut position = particle.position();
        let mut velocity = particle.velocity();
        let mut bounced = false;

        for axis in 0..2 {
            if position[axis] > hi[axis] {
                position[axis] = hi[axis];
                velocity[axis] = -velocity[axis].abs() * self.restitution;
                bounced = true;
            } else if position[axis] < lo[axis] {
                position[axis] = lo[axis];
                velocity[axis] = velocity[axis].abs() * self.restitution;
                bounced = true;
            }
        }

        if bounced {
            particle.set_position(position);
            particle.set_velocity(velocity);
        }
        bounced
    }
}
