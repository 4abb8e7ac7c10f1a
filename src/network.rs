//! Proximity graph construction.
//!
//! Every frame, all particle pairs are scanned and pairs closer than the
//! link radius become line segments whose alpha fades linearly with
//! distance: fully opaque at zero distance, fully transparent at the
//! radius. The scan is O(n²) by design; target counts are in the hundreds
//! and rebuilding from scratch beats maintaining an incremental structure.
//! Swapping in a uniform grid behind [`NetworkBuilder::build`] would not
//! change any consumer.

use glam::Vec3;

use crate::particle::Particle;

/// One fading connection line between two particles.
///
/// Ephemeral: rebuilt each frame from the current particle set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// First endpoint (particle with the lower index).
    pub a: Vec3,
    /// Second endpoint (particle with the higher index).
    pub b: Vec3,
    /// Opacity in `[0, 1]`: `1 - distance / link_radius`.
    pub alpha: f32,
}

/// Reusable builder for the per-frame proximity graph.
///
/// Owns the segment buffer so the allocation is reused across frames.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    segments: Vec<LineSegment>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the segment list from the current particle positions.
    ///
    /// Emits one segment per unordered pair `(i, j)`, `i < j`, whose
    /// distance is strictly below `link_radius`. Segments appear in
    /// ascending `(i, j)` order, so output is deterministic for a given
    /// particle ordering. An empty particle slice yields an empty list.
    pub fn build(&mut self, particles: &[Particle], link_radius: f32) -> &[LineSegment] {
        self.segments.clear();
        self.scan(particles, link_radius);
        &self.segments
    }

    /// The segments produced by the most recent [`build`](Self::build).
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(&mut self, particles: &[Particle], link_radius: f32) {
        for i in 0..particles.len() {
            scan_row(particles, i, link_radius, &mut self.segments);
        }
    }

    /// Parallel variant: rows of the pair triangle are scanned on worker
    /// threads, then concatenated in row order so the output is identical
    /// to the serial scan. The particle slice is shared read-only; nothing
    /// writes to it until the next frame's simulation update.
    #[cfg(feature = "parallel")]
    fn scan(&mut self, particles: &[Particle], link_radius: f32) {
        use rayon::prelude::*;

        let rows: Vec<Vec<LineSegment>> = (0..particles.len())
            .into_par_iter()
            .map(|i| {
                let mut row = Vec::new();
                scan_row(particles, i, link_radius, &mut row);
                row
            })
            .collect();

        for row in rows {
            self.segments.extend(row);
        }
    }
}

/// Scan all pairs `(i, j)` with `j > i` and push the qualifying segments.
fn scan_row(particles: &[Particle], i: usize, link_radius: f32, out: &mut Vec<LineSegment>) {
    let a = particles[i].position;
    for p in &particles[i + 1..] {
        let b = p.position;
        let dist = a.distance(b);
        if dist < link_radius {
            out.push(LineSegment {
                a,
                b,
                alpha: 1.0 - dist / link_radius,
            });
        }
    }
}
