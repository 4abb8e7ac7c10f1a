//! Orbit camera for viewing the particle cube.
//!
//! The camera is parameterized by yaw, pitch, and radius around a fixed
//! focus point, always looking at that point with a +Y up vector. Yaw is
//! left unbounded (trig makes it periodic); pitch is clamped short of the
//! poles to keep the look direction from flipping; radius is clamped to a
//! configured range.

use glam::{Mat4, Vec3};

/// How close the pitch may get to straight up/down, in radians.
const PITCH_MARGIN: f32 = 0.01;

/// Orbit camera state: spherical coordinates around a fixed target.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians. Unbounded.
    pub yaw: f32,
    /// Vertical rotation angle in radians, clamped to
    /// `(-PI/2 + margin, PI/2 - margin)`.
    pub pitch: f32,
    /// Distance from the target point, clamped to
    /// `[min_radius, max_radius]`.
    pub radius: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Closest allowed zoom.
    pub min_radius: f32,
    /// Farthest allowed zoom.
    pub max_radius: f32,
    /// Radians of rotation per pixel of drag.
    pub drag_sensitivity: f32,
    /// Distance change per scroll-wheel line.
    pub zoom_sensitivity: f32,
}

impl OrbitCamera {
    /// Camera setup matching the default scene scale: a 300-unit cube
    /// viewed from 600 units out.
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            radius: 600.0,
            target: Vec3::ZERO,
            min_radius: 100.0,
            max_radius: 1500.0,
            drag_sensitivity: 0.005,
            zoom_sensitivity: 30.0,
        }
    }

    /// Rotate by a mouse drag of `(delta_x, delta_y)` pixels.
    ///
    /// Pitch is clamped just short of the poles so the view never inverts.
    pub fn apply_drag(&mut self, delta_x: f32, delta_y: f32) {
        let limit = std::f32::consts::FRAC_PI_2 - PITCH_MARGIN;
        self.yaw += delta_x * self.drag_sensitivity;
        self.pitch = (self.pitch + delta_y * self.drag_sensitivity).clamp(-limit, limit);
    }

    /// Zoom by a scroll-wheel delta in lines. Positive scrolls in.
    pub fn apply_zoom(&mut self, lines: f32) {
        self.radius = (self.radius - lines * self.zoom_sensitivity)
            .clamp(self.min_radius, self.max_radius);
    }

    /// Calculate the camera's world position from the spherical coordinates.
    pub fn position(&self) -> Vec3 {
        let x = self.radius * self.pitch.cos() * self.yaw.sin();
        let y = self.radius * self.pitch.sin();
        let z = self.radius * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_default_eye_is_on_positive_z() {
        let camera = OrbitCamera::new();
        let eye = camera.position();
        assert!(eye.x.abs() < 1e-4);
        assert!(eye.y.abs() < 1e-4);
        assert!((eye.z - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_spherical_conversion_convention() {
        let mut camera = OrbitCamera::new();
        camera.yaw = FRAC_PI_2;
        camera.pitch = 0.0;
        camera.radius = 100.0;

        // yaw = PI/2 swings the eye onto +X.
        let eye = camera.position();
        assert!((eye.x - 100.0).abs() < 1e-3);
        assert!(eye.z.abs() < 1e-3);
    }

    #[test]
    fn test_pitch_never_reaches_pole() {
        let mut camera = OrbitCamera::new();
        for _ in 0..1000 {
            camera.apply_drag(0.0, 10_000.0);
        }
        assert!(camera.pitch < FRAC_PI_2);

        for _ in 0..1000 {
            camera.apply_drag(0.0, -10_000.0);
        }
        assert!(camera.pitch > -FRAC_PI_2);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut camera = OrbitCamera::new();
        for _ in 0..100 {
            camera.apply_drag(10_000.0, 0.0);
        }
        assert!(camera.yaw > std::f32::consts::TAU);
    }

    #[test]
    fn test_radius_clamps_both_ways() {
        let mut camera = OrbitCamera::new();
        for _ in 0..1000 {
            camera.apply_zoom(50.0);
        }
        assert_eq!(camera.radius, camera.min_radius);

        for _ in 0..1000 {
            camera.apply_zoom(-50.0);
        }
        assert_eq!(camera.radius, camera.max_radius);
    }

    #[test]
    fn test_view_matrix_looks_at_target() {
        let camera = OrbitCamera::new();
        let view = camera.view_matrix();

        // The target projects onto the view-space -Z axis at the radius.
        let target_view = view.transform_point3(camera.target);
        assert!(target_view.x.abs() < 1e-3);
        assert!(target_view.y.abs() < 1e-3);
        assert!((target_view.z + camera.radius).abs() < 1e-2);
    }
}
