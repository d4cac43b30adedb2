//! Orbiting camera driven by pointer deltas.
//!
//! The camera circles a pivot: dragging turns it (yaw around `y`, pitch
//! around `x`), right-dragging dollies in and out, ctrl-dragging pans the
//! pivot and shift-dragging swings the light instead of the camera.
//!
//! ```rust
//! use glsm_math::camera::{CameraInput, OrbitCamera, PointerButtons};
//! use glsm_math::Vec2;
//!
//! let mut cam = OrbitCamera::default();
//! let frame = cam.update(&CameraInput {
//!     pointer_delta: Vec2::new(10.0, 0.0),
//!     buttons: PointerButtons { left: true, ..Default::default() },
//!     ..Default::default()
//! });
//! assert!(cam.cam_ang.x() < 0.0);
//! assert!(frame.view.is_finite());
//! ```

use std::f64::consts::PI;

use crate::func::clamp;
use crate::matrix::Mat4;
use crate::vector::{Vec2, Vec3};

/// Radians per pixel of pointer motion when turning.
const TURN_RATE: f64 = 0.006;
/// Fraction of the distance per pixel when dollying.
const DOLLY_RATE: f64 = 0.005;
/// Largest per-update pointer step honored when dollying.
const DOLLY_STEP_LIMIT: f64 = 100.0;

/// Pointer button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons {
    /// Primary button
    pub left: bool,
    /// Secondary button, dollies the camera
    pub right: bool,
    /// Middle button
    pub middle: bool,
}

impl PointerButtons {
    /// Returns true if any button is held.
    #[inline]
    pub fn any(&self) -> bool {
        self.left || self.right || self.middle
    }
}

/// Input gathered by the host loop since the previous update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraInput {
    /// Pointer motion in pixels, y pointing down
    pub pointer_delta: Vec2<f64>,
    /// Buttons held during the motion
    pub buttons: PointerButtons,
    /// Either shift key held
    pub shift: bool,
    /// Either control key held
    pub ctrl: bool,
}

/// Output of one camera update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// View (model-view) matrix
    pub view: Mat4<f64>,
    /// Unit direction toward the light
    pub light_dir: Vec3<f64>,
}

/// Orbit camera state. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Yaw (`x`) and pitch (`y`) of the camera
    pub cam_ang: Vec2<f64>,
    /// Azimuth (`x`) and elevation (`y`) of the light
    pub light_ang: Vec2<f64>,
    /// Pivot offset, applied in world space
    pub cam_pos: Vec3<f64>,
    /// Distance from the pivot
    pub cam_dist: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            cam_ang: Vec2::new(0.0, 0.0),
            light_ang: Vec2::new(0.0, 0.8),
            cam_pos: Vec3::ZERO,
            cam_dist: 3.6,
        }
    }
}

impl OrbitCamera {
    /// Applies one frame of input and returns the new view and light.
    pub fn update(&mut self, input: &CameraInput) -> CameraFrame {
        let [dx, dy] = input.pointer_delta.to_array();
        let b = input.buttons;

        if b.right {
            self.cam_dist +=
                self.cam_dist * clamp(dy, -DOLLY_STEP_LIMIT, DOLLY_STEP_LIMIT) * DOLLY_RATE;
        } else if b.any() {
            let f = TURN_RATE;
            if input.shift {
                let x = self.light_ang.x() - dx * f;
                let y = clamp(self.light_ang.y() + dy * f, 0.1, PI - 0.1);
                self.light_ang = Vec2::new(x, y);
            } else if input.ctrl {
                let f = f * self.cam_dist * 0.3;
                let (dx, dy) = (dx * f, dy * f);
                let (si, co) = self.cam_ang.x().sin_cos();
                let p = &mut self.cam_pos;
                p.set_x(p.x() + co * dx + si * dy);
                p.set_y(p.y() - (co * dy - si * dx));
            } else {
                let x = self.cam_ang.x() - dx * f;
                let y = clamp(self.cam_ang.y() + dy * f, -PI * 0.5, PI * 0.5);
                self.cam_ang = Vec2::new(x, y);
            }
        }

        self.frame()
    }

    /// View matrix and light direction for the current state.
    pub fn frame(&self) -> CameraFrame {
        CameraFrame {
            view: self.view_matrix(),
            light_dir: self.light_dir(),
        }
    }

    /// `translate(0, 0, -dist) * rotY(-yaw) * rotX(pitch) * translate(pivot)`.
    pub fn view_matrix(&self) -> Mat4<f64> {
        let mut m = Mat4::identity();
        m.translate(0.0, 0.0, -self.cam_dist);
        m.rotate(-self.cam_ang.x().to_degrees(), Vec3::Y);
        m.rotate(self.cam_ang.y().to_degrees(), Vec3::X);
        m.translate(self.cam_pos.x(), self.cam_pos.y(), self.cam_pos.z());
        m
    }

    /// Unit vector toward the light.
    pub fn light_dir(&self) -> Vec3<f64> {
        let [lx, ly] = self.light_ang.to_array();
        let f = ly.cos();
        Vec3::new(lx.sin() * f, lx.cos() * f, ly.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn drag(dx: f64, dy: f64) -> CameraInput {
        CameraInput {
            pointer_delta: Vec2::new(dx, dy),
            buttons: PointerButtons {
                left: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_frame() {
        let cam = OrbitCamera::default();
        let frame = cam.frame();
        assert_relative_eq!(frame.view.camera_position().z(), 3.6, epsilon = 1e-12);
        assert_relative_eq!(frame.light_dir.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(frame.light_dir.z(), 0.8f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_no_buttons_no_change() {
        let mut cam = OrbitCamera::default();
        let before = cam;
        cam.update(&CameraInput {
            pointer_delta: Vec2::new(40.0, -12.0),
            ..Default::default()
        });
        assert_eq!(cam, before);
    }

    #[test]
    fn test_turn() {
        let mut cam = OrbitCamera::default();
        cam.update(&drag(100.0, 50.0));
        assert_relative_eq!(cam.cam_ang.x(), -0.6, epsilon = 1e-12);
        assert_relative_eq!(cam.cam_ang.y(), 0.3, epsilon = 1e-12);

        // Pitch clamps at the poles
        cam.update(&drag(0.0, 10_000.0));
        assert_eq!(cam.cam_ang.y(), PI * 0.5);
    }

    #[test]
    fn test_turn_keeps_distance() {
        let mut cam = OrbitCamera::default();
        let frame = cam.update(&drag(37.0, -81.0));
        assert_relative_eq!(frame.view.camera_position().length(), 3.6, epsilon = 1e-12);
    }

    #[test]
    fn test_dolly() {
        let mut cam = OrbitCamera::default();
        let mut input = drag(0.0, 20.0);
        input.buttons.right = true;
        cam.update(&input);
        assert_relative_eq!(cam.cam_dist, 3.6 * 1.1, epsilon = 1e-12);

        // Large steps are limited
        input.pointer_delta = Vec2::new(0.0, -1000.0);
        let d = cam.cam_dist;
        cam.update(&input);
        assert_relative_eq!(cam.cam_dist, d * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_light_swing() {
        let mut cam = OrbitCamera::default();
        let mut input = drag(10.0, -1000.0);
        input.shift = true;
        cam.update(&input);
        assert_relative_eq!(cam.light_ang.x(), -0.06, epsilon = 1e-12);
        assert_eq!(cam.light_ang.y(), 0.1);
        assert_eq!(cam.cam_ang, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_pan() {
        let mut cam = OrbitCamera::default();
        let mut input = drag(10.0, 0.0);
        input.ctrl = true;
        cam.update(&input);
        // yaw 0: horizontal drag pans along x
        assert_relative_eq!(cam.cam_pos.x(), 10.0 * 0.006 * 3.6 * 0.3, epsilon = 1e-12);
        assert_eq!(cam.cam_pos.y(), 0.0);
        assert_eq!(cam.cam_pos.z(), 0.0);
    }
}
