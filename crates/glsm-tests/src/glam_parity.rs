//! The math kernel against glam on shared inputs.

use approx::assert_relative_eq;
use glam::{DMat3, DMat4, DVec3, DVec4, Mat4 as GMat4};
use glsm_math::camera::{look_at, orthographic_projection, perspective_projection};
use glsm_math::{Mat3, Mat4, Vec3, Vec4};

fn assert_mat4_close(ours: Mat4, theirs: DMat4, eps: f64) {
    let a: [f64; 16] = ours.to_cols_array();
    let b = theirs.to_cols_array();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_relative_eq!(*x, *y, epsilon = eps, max_relative = eps);
    }
}

fn samples() -> Vec<Mat4> {
    let mut out = Vec::new();
    for k in 0..8 {
        let f = k as f64;
        let mut m = Mat4::rotation(17.0 + 40.0 * f, Vec3::new(f - 3.0, 1.0, 0.5 * f));
        m.translate(f, -2.0 * f, 0.25);
        out.push(m * (1.0 + 0.1 * f));
    }
    out.push(Mat4::from_cols([
        [2.0, 0.5, 0.0, 1.0],
        [0.0, 3.0, 1.5, 0.0],
        [1.0, 0.0, 4.0, 2.0],
        [0.5, 1.0, 0.0, 5.0],
    ]));
    out
}

#[test]
fn test_inverse_matches_glam() {
    for m in samples() {
        assert_mat4_close(m.inverse(), DMat4::from(m).inverse(), 1e-10);
        assert_relative_eq!(m.determinant(), DMat4::from(m).determinant(), max_relative = 1e-12);
    }
}

#[test]
fn test_mat3_matches_glam() {
    for m in samples() {
        let ours = Mat3::from(m);
        let theirs = DMat3::from_mat4(DMat4::from(m));
        let inv: [f64; 9] = ours.inverse().to_cols_array();
        for (x, y) in inv.iter().zip(theirs.inverse().to_cols_array()) {
            assert_relative_eq!(*x, y, epsilon = 1e-10, max_relative = 1e-10);
        }
    }
}

#[test]
fn test_products_match_glam() {
    let v = Vec4::new(0.3, -1.5, 2.0, 1.0);
    let gv = DVec4::new(0.3, -1.5, 2.0, 1.0);
    for m in samples() {
        let g = DMat4::from(m);
        let mv = m * v;
        let gmv = g * gv;
        for i in 0..4 {
            assert_relative_eq!(mv[i], gmv[i], epsilon = 1e-12);
        }
        assert_mat4_close(m * m, g * g, 1e-10);
    }
}

#[test]
fn test_rotation_direction_matches_glam() {
    // Positive angles rotate counter-clockwise about the axis
    let axis = Vec3::new(1.0, -2.0, 0.5);
    for deg in [-120.0, -15.0, 30.0, 90.0, 200.0f64] {
        let ours = Mat4::rotation(deg, axis);
        let theirs = DMat4::from_axis_angle(DVec3::new(1.0, -2.0, 0.5).normalize(), deg.to_radians());
        assert_mat4_close(ours, theirs, 1e-12);
    }
}

#[test]
fn test_projections_match_glam() {
    let ours = perspective_projection(70.0, 1.5, 0.25, 200.0);
    let theirs = DMat4::perspective_rh_gl(70f64.to_radians(), 1.5, 0.25, 200.0);
    assert_mat4_close(ours, theirs, 1e-12);

    let ours = orthographic_projection(-2.0, 3.0, -1.0, 4.0, 0.5, 40.0);
    let theirs = DMat4::orthographic_rh_gl(-2.0, 3.0, -1.0, 4.0, 0.5, 40.0);
    assert_mat4_close(ours, theirs, 1e-12);
}

#[test]
fn test_look_at_matches_glam() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let target = Vec3::new(0.0, 1.0, -1.0);
    let ours = look_at(eye, target, Vec3::Y);
    let theirs = DMat4::look_at_rh(
        DVec3::new(3.0, 4.0, 5.0),
        DVec3::new(0.0, 1.0, -1.0),
        DVec3::Y,
    );
    assert_mat4_close(ours, theirs, 1e-12);
}

#[test]
fn test_vector_ops_match_glam() {
    let a = Vec3::new(1.5, -2.0, 0.25);
    let b = Vec3::new(-0.5, 4.0, 3.0);
    let (ga, gb) = (DVec3::from(a), DVec3::from(b));

    assert_eq!(DVec3::from(a.cross(b)), ga.cross(gb));
    assert_eq!(a.dot(b), ga.dot(gb));
    assert_relative_eq!(a.length(), ga.length());
    let n = DVec3::from(a.normalize());
    assert_relative_eq!(n.x, ga.normalize().x, epsilon = 1e-15);
    let r = DVec3::from(a.reflect(b));
    let gr = ga - 2.0 * gb.dot(ga) * gb;
    assert_relative_eq!(r.x, gr.x, epsilon = 1e-12);
    assert_relative_eq!(r.y, gr.y, epsilon = 1e-12);
    assert_relative_eq!(r.z, gr.z, epsilon = 1e-12);
}

#[test]
fn test_f32_upload_matches_glam() {
    let m = samples()[3].cast::<f32>();
    let g = GMat4::from(m);
    let ours: [f32; 16] = m.to_cols_array();
    assert_eq!(ours, g.to_cols_array());
    assert_eq!(Mat4::<f32>::from(g), m);
}
