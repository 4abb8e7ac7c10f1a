//! Particle state.

use glam::Vec3;

/// A single particle inside the bounded cube.
///
/// Particles are owned exclusively by [`Simulation`](crate::Simulation);
/// the count is fixed at construction and never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in world space.
    pub position: Vec3,
    /// Velocity in world units per second.
    pub velocity: Vec3,
}

impl Particle {
    /// Create a particle from a position and velocity.
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Create a stationary particle at the given position.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }
}
