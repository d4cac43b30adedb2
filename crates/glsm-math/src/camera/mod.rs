//! Camera and projection math.
//!
//! View matrices follow the convention `view = rotation * translate(-eye)`:
//! the upper-left 3x3 block is an orthonormal rotation and the last column
//! holds the rotated, negated eye position. Projections produce OpenGL
//! clip space (`z` in `[-w, w]`, camera looking down `-z`).
//!
//! # Usage
//!
//! ```rust
//! use glsm_math::camera::{look_at, perspective_projection};
//! use glsm_math::Vec3;
//!
//! let eye = Vec3::new(0.0, -5.0, 2.0);
//! let view = look_at(eye, Vec3::ZERO, Vec3::Z);
//! let proj = perspective_projection(60.0, 16.0 / 9.0, 0.1, 100.0);
//!
//! let p = view.camera_position();
//! assert!((p - eye).length() < 1e-12);
//! # let _ = proj;
//! ```

mod orbit;

pub use orbit::{CameraFrame, CameraInput, OrbitCamera, PointerButtons};

use glsm_core::{Error, Real, Result};

use crate::matrix::{Mat3, Mat4};
use crate::vector::{Vec2, Vec3, Vec4};

/// Pixel rectangle of the render target, origin at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    /// Left edge in pixels
    pub x: i32,
    /// Bottom edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Viewport {
    /// Viewport at the origin with the given size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Width over height.
    ///
    /// Not checked: a zero height yields Inf (or NaN when the width is also
    /// zero). Use [`try_aspect`](Self::try_aspect) to reject such viewports.
    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Width over height, or [`Error::EmptyViewport`] unless both sides are
    /// positive.
    pub fn try_aspect(&self) -> Result<f64> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.aspect())
    }
}

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T> {
    /// Start point (the camera position)
    pub origin: Vec3<T>,
    /// Direction of travel
    pub direction: Vec3<T>,
}

impl<T: Real> Ray<T> {
    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: T) -> Vec3<T> {
        self.origin + self.direction * t
    }
}

impl<T: Real> Mat4<T> {
    /// World-space eye position of a view matrix.
    ///
    /// Computed as `-inverse(mat3(self)) * self[3].xyz`. The rotation block
    /// must be invertible; for an orthonormal block this equals the
    /// transpose form `-transpose(R) * t`.
    pub fn camera_position(&self) -> Vec3<T> {
        Mat3::from(*self).inverse() * -self.cols[3].truncate()
    }

    /// Moves the eye of a view matrix to `pos`, keeping its orientation.
    ///
    /// Rewrites the last column as `(mat3(self) * -pos, 1)`.
    pub fn set_camera_position(&mut self, pos: Vec3<T>) {
        self.cols[3] = (Mat3::from(*self) * -pos).extend(T::ONE);
    }
}

/// Eye position of a view matrix, see [`Mat4::camera_position`].
#[inline]
pub fn camera_position<T: Real>(view: &Mat4<T>) -> Vec3<T> {
    view.camera_position()
}

/// Moves the eye of `view` to `pos`, see [`Mat4::set_camera_position`].
#[inline]
pub fn set_camera_position<T: Real>(view: &mut Mat4<T>, pos: Vec3<T>) {
    view.set_camera_position(pos)
}

/// Right-handed view matrix looking from `eye` toward `target`.
///
/// The rows of the rotation block are right, up and backward (`eye -
/// target`), each normalized. When `up` is parallel to the view direction
/// the right vector has zero length and the result is NaN.
pub fn look_at<T: Real>(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Mat4<T> {
    let f = eye - target;
    let f = f * (T::ONE / f.length());
    let r = up.cross(f);
    let r = r * (T::ONE / r.length());
    let d = f.cross(r);

    Mat4::from_rows([
        [r.x(), r.y(), r.z(), -r.dot(eye)],
        [d.x(), d.y(), d.z(), -d.dot(eye)],
        [f.x(), f.y(), f.z(), -f.dot(eye)],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ])
}

/// Symmetric perspective projection.
///
/// `fov_y` is the full vertical field of view in degrees, `aspect` is
/// width over height. Requires `near != far` and `0 < fov_y < 180`; neither
/// is checked.
pub fn perspective_projection<T: Real>(fov_y: T, aspect: T, near: T, far: T) -> Mat4<T> {
    let two = T::from_f64(2.0);
    let d = T::ONE / (T::PI * fov_y / T::from_f64(360.0)).tan();
    let cz = (near + far) / (near - far);
    let cp = two * far * near / (near - far);
    let o = T::ZERO;
    Mat4::from_cols([
        [d / aspect, o, o, o],
        [o, d, o, o],
        [o, o, cz, -T::ONE],
        [o, o, cp, o],
    ])
}

/// Parallel projection of the box `[left, right] x [bottom, top] x [-near, -far]`.
///
/// All three extents must be nonzero; this is not checked.
pub fn orthographic_projection<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Mat4<T> {
    let two = T::from_f64(2.0);
    let o = T::ZERO;
    Mat4::from_cols([
        [two / (right - left), o, o, o],
        [o, two / (top - bottom), o, o],
        [o, o, -two / (far - near), o],
        [
            -(right + left) / (right - left),
            -(top + bottom) / (top - bottom),
            -(far + near) / (far - near),
            T::ONE,
        ],
    ])
}

/// Unprojects a pixel into a world-space ray.
///
/// `screen` is in window coordinates with the origin at the top-left, so
/// the y axis is flipped against the bottom-left `viewport`. The pixel is
/// mapped to the far plane in clip space (`z = w = 1`), carried back
/// through `inverse(proj)` and `inverse(view)`, and the resulting
/// homogeneous vector is normalized as a 4-vector before its `xyz` part is
/// taken as the direction. The direction is therefore only approximately
/// unit length; its `w` share shrinks as the far plane moves out.
pub fn calculate_ray<T: Real>(
    screen: Vec2<T>,
    view: &Mat4<T>,
    proj: &Mat4<T>,
    viewport: Viewport,
) -> Ray<T> {
    let two = T::from_f64(2.0);
    let vx = T::from_f64(viewport.x as f64);
    let vy = T::from_f64(viewport.y as f64);
    let w = T::from_f64(viewport.width as f64);
    let h = T::from_f64(viewport.height as f64);
    let [sx, sy] = screen.to_array();

    let clip = Vec4::new(
        (sx - vx) * two / w - T::ONE,
        (vy + h - sy) * two / h - T::ONE,
        T::ONE,
        T::ONE,
    );
    let dir = view.inverse() * (proj.inverse() * clip);

    Ray {
        origin: view.camera_position(),
        direction: dir.normalize().truncate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec_near(a: Vec3, b: Vec3, eps: f64) {
        assert!((a - b).length() < eps, "{a:?} != {b:?}");
    }

    #[test]
    fn test_camera_position_roundtrip() {
        let mut m = Mat4::rotation(35.0, Vec3::new(1.0, -2.0, 0.5));
        let p = Vec3::new(3.0, -4.0, 7.5);
        m.set_camera_position(p);
        assert_vec_near(m.camera_position(), p, 1e-12);
        assert_eq!(m.col(3).w(), 1.0);

        set_camera_position(&mut m, Vec3::ZERO);
        assert_vec_near(camera_position(&m), Vec3::ZERO, 1e-15);
    }

    #[test]
    fn test_camera_position_of_translated_view() {
        // view = translate(-eye)
        let m = Mat4::translation(-1.0, -2.0, -3.0);
        assert_eq!(m.camera_position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_look_at() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let view = look_at(eye, Vec3::ZERO, Vec3::Y);
        // Looking down -z from +z is a pure translation
        assert!(view.max_abs_diff(&Mat4::translation(0.0, 0.0, -5.0)) < 1e-12);

        let eye = Vec3::new(2.0, -3.0, 1.0);
        let target = Vec3::new(0.5, 0.5, 0.0);
        let view = look_at(eye, target, Vec3::Z);
        assert_vec_near(view.camera_position(), eye, 1e-12);
        // Target lands on the -z axis in view space
        let t = view * target.extend(1.0);
        assert_relative_eq!(t.x(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(t.y(), 0.0, epsilon = 1e-12);
        assert!(t.z() < 0.0);
        assert_relative_eq!(-t.z(), (eye - target).length(), epsilon = 1e-12);
    }

    #[test]
    fn test_look_at_parallel_up_is_nan() {
        let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Z);
        assert!(!view.is_finite());
    }

    #[test]
    fn test_perspective() {
        let p = perspective_projection(90.0, 2.0, 1.0, 10.0);
        assert_relative_eq!(p.get(0, 0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(p.get(1, 1), 1.0, epsilon = 1e-12);
        assert_eq!(p.get(3, 2), -1.0);
        assert_eq!(p.get(3, 3), 0.0);

        // Near and far planes map to -1 and 1
        let n = p * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let f = p * Vec4::new(0.0, 0.0, -10.0, 1.0);
        assert_relative_eq!(n.z() / n.w(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(f.z() / f.w(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perspective_matches_glam() {
        let ours = perspective_projection(60.0f32, 1.5, 0.1, 50.0);
        let theirs = glam::Mat4::perspective_rh_gl(60f32.to_radians(), 1.5, 0.1, 50.0);
        let ours: glam::Mat4 = ours.into();
        assert!(ours.abs_diff_eq(theirs, 1e-5));
    }

    #[test]
    fn test_orthographic() {
        let o = orthographic_projection(-2.0, 2.0, -1.0, 1.0, 0.5, 10.0);
        let c = o * Vec4::new(2.0, 1.0, -10.0, 1.0);
        assert_relative_eq!(c.x(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.y(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.z(), 1.0, epsilon = 1e-12);
        assert_eq!(c.w(), 1.0);

        let theirs = glam::DMat4::orthographic_rh_gl(-2.0, 2.0, -1.0, 1.0, 0.5, 10.0);
        assert!(o.max_abs_diff(&Mat4::from(theirs)) < 1e-12);
    }

    #[test]
    fn test_viewport_aspect() {
        let vp = Viewport::new(1280, 720);
        assert_relative_eq!(vp.aspect(), 16.0 / 9.0);
        assert_eq!(vp.try_aspect(), Ok(vp.aspect()));

        let flat = Viewport::new(640, 0);
        assert_eq!(flat.aspect(), f64::INFINITY);
        assert!(Viewport::new(0, 0).aspect().is_nan());
        assert_eq!(
            flat.try_aspect(),
            Err(Error::EmptyViewport {
                width: 640,
                height: 0
            })
        );
        assert!(Viewport::new(-4, 3).try_aspect().is_err());
    }

    #[test]
    fn test_calculate_ray_center() {
        let view = Mat4::identity();
        let proj = perspective_projection(90.0, 1.0, 1.0, 100.0);
        let ray = calculate_ray(Vec2::new(50.0, 50.0), &view, &proj, Viewport::new(100, 100));
        assert_eq!(ray.origin, Vec3::ZERO);
        assert_relative_eq!(ray.direction.x(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ray.direction.y(), 0.0, epsilon = 1e-12);
        assert!(ray.direction.z() < -0.99);
    }

    #[test]
    fn test_calculate_ray_flips_y() {
        let view = look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
        let proj = perspective_projection(90.0, 1.0, 0.1, 1000.0);
        let vp = Viewport {
            x: 10,
            y: 20,
            width: 200,
            height: 200,
        };
        // Top edge of the viewport in window coordinates
        let ray = calculate_ray(Vec2::new(110.0, 20.0), &view, &proj, vp);
        assert_vec_near(ray.origin, Vec3::new(0.0, 0.0, 3.0), 1e-9);
        let d = ray.direction.normalize();
        // 90 degree fov: top edge is 45 degrees up
        assert_relative_eq!(d.y(), -d.z(), epsilon = 1e-2);
        assert!(d.y() > 0.0);
        assert_relative_eq!(d.x(), 0.0, epsilon = 1e-9);
    }
}
