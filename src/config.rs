//! Simulation configuration.
//!
//! All parameters are validated up front: a zero particle count or a
//! non-positive extent is a programmer error, rejected at construction
//! rather than papered over at runtime.

use crate::error::ConfigError;

/// Immutable parameters for a particle network simulation.
///
/// Use method chaining to adjust the defaults:
///
/// ```
/// use particle_network::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_particle_count(400)
///     .with_half_extent(150.0)
///     .with_link_radius(40.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of particles. Fixed for the lifetime of the simulation.
    pub particle_count: usize,
    /// Half-size of the spawn cube: initial positions are uniform in
    /// `[-spawn_extent, +spawn_extent]` per axis. Independent of
    /// `half_extent`; the two need not match.
    pub spawn_extent: f32,
    /// Half-size of the containment cube the particles bounce inside.
    pub half_extent: f32,
    /// Width of the initial velocity distribution: each component is
    /// uniform in `[-speed_range / 2, +speed_range / 2]`.
    pub speed_range: f32,
    /// Maximum distance at which two particles are linked by a line.
    pub link_radius: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 400,
            spawn_extent: 100.0,
            half_extent: 150.0,
            speed_range: 40.0,
            link_radius: 40.0,
        }
    }
}

impl SimulationConfig {
    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the spawn cube half-size.
    pub fn with_spawn_extent(mut self, extent: f32) -> Self {
        self.spawn_extent = extent;
        self
    }

    /// Set the containment cube half-size.
    pub fn with_half_extent(mut self, extent: f32) -> Self {
        self.half_extent = extent;
        self
    }

    /// Set the initial speed range.
    pub fn with_speed_range(mut self, range: f32) -> Self {
        self.speed_range = range;
        self
    }

    /// Set the proximity link radius.
    pub fn with_link_radius(mut self, radius: f32) -> Self {
        self.link_radius = radius;
        self
    }

    /// Check all preconditions, failing fast on the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticleCount);
        }
        if !(self.spawn_extent > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "spawn_extent",
                value: self.spawn_extent,
            });
        }
        if !(self.half_extent > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "half_extent",
                value: self.half_extent,
            });
        }
        if !(self.speed_range > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "speed_range",
                value: self.speed_range,
            });
        }
        if !(self.link_radius > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "link_radius",
                value: self.link_radius,
            });
        }
        Ok(())
    }
}
