//! # Particle Network
//!
//! Real-time visualization of a bounded particle swarm: points drift inside a
//! cubic volume, bounce elastically off its walls, and are connected by fading
//! lines whenever two particles come within a proximity threshold. The camera
//! orbits the cube with mouse drag and zooms with the mouse wheel.
//!
//! ## Quick Start
//!
//! ```ignore
//! use particle_network::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     let config = SimulationConfig::default()
//!         .with_particle_count(400)
//!         .with_link_radius(40.0);
//!     particle_network::app::run(config)
//! }
//! ```
//!
//! ## Architecture
//!
//! The core is a CPU pipeline driven once per frame:
//!
//! 1. [`Simulation::update`] integrates particle positions and reflects
//!    velocities off the cube walls.
//! 2. [`NetworkBuilder::build`] scans every particle pair and emits a line
//!    segment with a distance-based alpha for each pair closer than the link
//!    radius. The scan is deliberately O(n²); the target particle count is
//!    small (hundreds) and rebuilding each frame is simpler than maintaining
//!    an incremental neighbor structure.
//! 3. [`OrbitCamera`] turns accumulated drag/zoom input into a view matrix.
//!
//! The GPU side ([`gpu::GpuState`]) is a plain consumer: it uploads the line
//! and point vertex streams plus the view-projection matrix and draws them.
//! Enable the `parallel` feature to partition the pair scan across threads
//! with rayon; output order is unchanged.

pub mod app;
pub mod camera;
pub mod config;
pub mod error;
pub mod gpu;
pub mod input;
pub mod network;
pub mod particle;
pub mod simulation;
pub mod time;

pub use camera::OrbitCamera;
pub use config::SimulationConfig;
pub use error::{ConfigError, GpuError, RunError};
pub use glam::{Mat4, Vec2, Vec3};
pub use network::{LineSegment, NetworkBuilder};
pub use particle::Particle;
pub use simulation::Simulation;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use particle_network::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::OrbitCamera;
    pub use crate::config::SimulationConfig;
    pub use crate::error::{ConfigError, GpuError, RunError};
    pub use crate::input::Input;
    pub use crate::network::{LineSegment, NetworkBuilder};
    pub use crate::particle::Particle;
    pub use crate::simulation::Simulation;
    pub use crate::time::Time;
    pub use crate::{Mat4, Vec2, Vec3};
}
