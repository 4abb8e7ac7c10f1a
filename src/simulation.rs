//! Particle simulation: spawning, integration, and wall bounces.
//!
//! The update step is intentionally simple: positions advance by
//! `velocity * dt`, then any axis that ended up outside the containment
//! cube has its velocity component negated and its position clamped back
//! inside. The reflection decision is based on the post-move position, not
//! a collision-time calculation, so a large `dt` can bounce a particle
//! several wall-widths in one step. That trade-off is acceptable for a
//! visual effect and keeps the integrator failure-free.

use rand::Rng;

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::particle::Particle;

/// Owner of the particle collection.
///
/// The particle count is fixed at construction; [`update`](Self::update)
/// mutates all particles in place once per frame.
pub struct Simulation {
    config: SimulationConfig,
    particles: Vec<Particle>,
}

impl Simulation {
    /// Create a simulation with uniformly random positions and velocities.
    ///
    /// Positions are drawn per axis from `[-spawn_extent, +spawn_extent]`
    /// and velocity components from `[-speed_range / 2, +speed_range / 2]`.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let mut rng = rand::thread_rng();
        let spawn = config.spawn_extent;
        let half_speed = config.speed_range / 2.0;

        Self::with_spawner(config, |_| Particle {
            position: glam::Vec3::new(
                rng.gen_range(-spawn..spawn),
                rng.gen_range(-spawn..spawn),
                rng.gen_range(-spawn..spawn),
            ),
            velocity: glam::Vec3::new(
                rng.gen_range(-half_speed..half_speed),
                rng.gen_range(-half_speed..half_speed),
                rng.gen_range(-half_speed..half_speed),
            ),
        })
    }

    /// Create a simulation with a custom spawner.
    ///
    /// The spawner is called once per particle with the particle index.
    /// Useful for deterministic setups and tests.
    pub fn with_spawner<F>(config: SimulationConfig, mut spawner: F) -> Result<Self, ConfigError>
    where
        F: FnMut(usize) -> Particle,
    {
        config.validate()?;

        let particles = (0..config.particle_count).map(&mut spawner).collect();
        log::info!(
            "Spawned {} particles (spawn extent {}, bounds {})",
            config.particle_count,
            config.spawn_extent,
            config.half_extent
        );

        Ok(Self { config, particles })
    }

    /// Advance all particles by `dt` seconds.
    ///
    /// Per axis: integrate, negate velocity if the post-move position lies
    /// outside the containment cube, then hard-clamp the position into the
    /// cube so a particle never visually escapes, even for one frame.
    ///
    /// The negation is unconditional on out-of-bounds, regardless of travel
    /// direction; combined with the clamp this matches the classic demo
    /// behavior, where a bounce lands the particle exactly on the wall.
    pub fn update(&mut self, dt: f32) {
        let h = self.config.half_extent;

        for p in &mut self.particles {
            p.position += p.velocity * dt;

            for axis in 0..3 {
                if p.position[axis] < -h || p.position[axis] > h {
                    p.velocity[axis] = -p.velocity[axis];
                }
                p.position[axis] = p.position[axis].clamp(-h, h);
            }
        }
    }

    /// Read-only view of the particle collection.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The configuration this simulation was built with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn single(config: SimulationConfig, particle: Particle) -> Simulation {
        Simulation::with_spawner(config.with_particle_count(1), |_| particle)
            .expect("valid config")
    }

    #[test]
    fn test_spawn_respects_ranges() {
        let config = SimulationConfig::default()
            .with_particle_count(200)
            .with_spawn_extent(50.0)
            .with_speed_range(10.0);
        let sim = Simulation::new(config).unwrap();

        assert_eq!(sim.particles().len(), 200);
        for p in sim.particles() {
            for axis in 0..3 {
                assert!(p.position[axis].abs() <= 50.0);
                assert!(p.velocity[axis].abs() <= 5.0);
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::default().with_particle_count(0);
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_straight_line_integration() {
        let mut sim = single(
            SimulationConfig::default(),
            Particle::new(Vec3::ZERO, Vec3::new(2.0, -3.0, 1.0)),
        );

        sim.update(0.5);
        assert_eq!(sim.particles()[0].position, Vec3::new(1.0, -1.5, 0.5));
        assert_eq!(sim.particles()[0].velocity, Vec3::new(2.0, -3.0, 1.0));
    }

    #[test]
    fn test_wall_reflection_flips_velocity_and_clamps() {
        // Starts one unit from the +X wall moving outward; one step of dt=1
        // overshoots to x=159, the velocity flips, and the clamp lands the
        // particle exactly on the wall.
        let mut sim = single(
            SimulationConfig::default().with_half_extent(150.0),
            Particle::new(Vec3::new(149.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)),
        );

        sim.update(1.0);
        let p = sim.particles()[0];
        assert_eq!(p.velocity.x, -10.0);
        assert_eq!(p.position.x, 150.0);
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.position.z, 0.0);
    }

    #[test]
    fn test_reflection_is_per_axis() {
        let mut sim = single(
            SimulationConfig::default().with_half_extent(10.0),
            Particle::new(Vec3::new(9.5, -9.5, 0.0), Vec3::new(2.0, -2.0, 1.0)),
        );

        sim.update(1.0);
        let p = sim.particles()[0];
        assert_eq!(p.velocity, Vec3::new(-2.0, 2.0, 1.0));
        assert_eq!(p.position, Vec3::new(10.0, -10.0, 1.0));
    }

    #[test]
    fn test_containment_invariant_over_many_steps() {
        let config = SimulationConfig::default()
            .with_particle_count(64)
            .with_half_extent(20.0)
            .with_spawn_extent(20.0)
            .with_speed_range(200.0);
        let mut sim = Simulation::new(config).unwrap();

        for _ in 0..500 {
            sim.update(0.1);
            for p in sim.particles() {
                for axis in 0..3 {
                    assert!(
                        p.position[axis] >= -20.0 && p.position[axis] <= 20.0,
                        "particle escaped on axis {}: {}",
                        axis,
                        p.position[axis]
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_dt_is_a_no_op_for_interior_particles() {
        let before = Particle::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let mut sim = single(SimulationConfig::default(), before);

        sim.update(0.0);
        assert_eq!(sim.particles()[0], before);
    }
}
