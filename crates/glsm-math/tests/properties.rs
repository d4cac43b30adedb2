//! Algebraic properties of the vector, matrix and camera operations.

use approx::assert_relative_eq;
use glsm_math::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

fn mat2_samples() -> Vec<Mat2> {
    vec![
        Mat2::from_cols([[1.0, 2.0], [4.0, 3.0]]),
        Mat2::rotation(17.0) * 3.0,
        Mat2::from_cols([[1e-3, 0.0], [5.0, 2e3]]),
    ]
}

fn mat3_samples() -> Vec<Mat3> {
    vec![
        Mat3::from_cols([[1.0, 2.0, 3.0], [6.0, 5.0, 4.0], [7.0, 9.0, 8.0]]),
        Mat3::rotation(71.0, Vec3::new(-1.0, 0.25, 2.0)),
        Mat3::from_diagonal(Vec3::new(4.0, 0.5, -2.0)) * Mat3::rotation(10.0, Vec3::X),
    ]
}

fn mat4_samples() -> Vec<Mat4> {
    let mut affine = Mat4::rotation(-48.0, Vec3::new(0.3, 1.0, -0.7));
    affine.translate(2.0, -7.0, 0.5);
    vec![
        Mat4::from_cols([
            [1.0, 2.0, 3.0, 4.0],
            [6.0, 5.0, 4.0, 3.0],
            [7.0, 9.0, 8.0, 6.0],
            [9.0, 6.0, 3.0, 2.0],
        ]),
        affine,
        glsm_math::camera::perspective_projection(75.0, 1.6, 0.5, 300.0),
    ]
}

/// Relative closeness to the identity, scaled by the matrix magnitude.
fn near_identity<const N: usize>(p: glsm_math::Matrix<f64, N>, scale: f64) -> bool {
    p.max_abs_diff(&glsm_math::Matrix::identity()) <= 1e-6 * scale.max(1.0)
}

#[test]
fn inverse_times_matrix_is_identity() {
    for m in mat2_samples() {
        assert!(near_identity(m * m.inverse(), 1.0), "{m:?}");
    }
    for m in mat3_samples() {
        assert!(near_identity(m * m.inverse(), 1.0), "{m:?}");
    }
    for m in mat4_samples() {
        assert!(near_identity(m * m.inverse(), 1.0), "{m:?}");
    }
}

#[test]
fn row_vector_product_is_transposed_product() {
    let a2 = Vec2::new(0.5, -3.0);
    for m in mat2_samples() {
        assert_eq!(a2 * m, m.transpose() * a2);
    }
    let a3 = Vec3::new(1.0, -2.0, 0.25);
    for m in mat3_samples() {
        assert_eq!(a3 * m, m.transpose() * a3);
    }
    let a4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
    for m in mat4_samples() {
        assert_eq!(a4 * m, m.transpose() * a4);
    }
}

#[test]
fn concrete_products() {
    let m = Mat2::from_cols([[1.0, 2.0], [4.0, 3.0]]);
    let a = Vec2::new(1.0, 2.0);
    assert_eq!(m * a, Vec2::new(9.0, 8.0));
    assert_eq!(a * m, Vec2::new(5.0, 10.0));

    let m = Mat3::from_cols([[1.0, 2.0, 3.0], [6.0, 5.0, 4.0], [7.0, 9.0, 8.0]]);
    let a = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(m * a, Vec3::new(34.0, 39.0, 35.0));
    assert_eq!(a * m, Vec3::new(14.0, 28.0, 49.0));

    let m = mat4_samples()[0];
    let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(m * a, Vec4::new(70.0, 63.0, 47.0, 36.0));
    assert_eq!(a * m, Vec4::new(30.0, 40.0, 73.0, 38.0));
}

#[test]
fn normalize_is_idempotent() {
    for v in [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-1e-3, 5e2, 7.0),
        Vec3::new(0.0, 0.0, -9.0),
    ] {
        let n = v.normalize();
        let nn = n.normalize();
        assert!((nn - n).length() < 1e-15);
    }
    assert_eq!(Vec4::<f64>::ZERO.normalize(), Vec4::ZERO);
    assert_eq!(Vec2::<f32>::ZERO.normalize(), Vec2::ZERO);
}

#[test]
fn reflect_unit_normal_onto_itself() {
    for v in [Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, -1.0, 0.0), Vec3::new(4.0, 0.0, -3.0)] {
        let n = v.normalize();
        assert!((n.reflect(n) + n).length() < 1e-15);
    }
}

#[test]
fn zero_angle_rotation_is_identity() {
    for axis in [Vec3::X, Vec3::new(1.0, 1.0, 1.0), Vec3::new(-0.2, 3.0, 9.0)] {
        assert!(Mat3::rotation(0.0, axis).max_abs_diff(&Mat3::identity()) < 1e-15);
        assert!(Mat4::rotation(0.0, axis).max_abs_diff(&Mat4::identity()) < 1e-15);
    }
    assert_eq!(Mat2::rotation(0.0), Mat2::<f64>::identity());
}

#[test]
fn camera_position_roundtrip() {
    for (angle, axis) in [
        (0.0, Vec3::Y),
        (30.0, Vec3::new(1.0, 0.0, 0.0)),
        (-125.0, Vec3::new(0.4, -0.2, 1.0)),
    ] {
        let mut view = Mat4::rotation(angle, axis);
        view.translate(3.0, 1.0, -2.0);
        for p in [Vec3::ZERO, Vec3::new(10.0, -4.0, 2.5), Vec3::new(-0.1, 0.2, 1e3)] {
            view.set_camera_position(p);
            let q = view.camera_position();
            assert_relative_eq!(q.x(), p.x(), epsilon = 1e-9, max_relative = 1e-12);
            assert_relative_eq!(q.y(), p.y(), epsilon = 1e-9, max_relative = 1e-12);
            assert_relative_eq!(q.z(), p.z(), epsilon = 1e-9, max_relative = 1e-12);
        }
    }
}

#[test]
fn flatten_is_column_major() {
    let m = Mat4::from_rows([
        [0.0, 4.0, 8.0, 12.0],
        [1.0, 5.0, 9.0, 13.0],
        [2.0, 6.0, 10.0, 14.0],
        [3.0, 7.0, 11.0, 15.0],
    ]);
    let flat: [f32; 16] = m.to_cols_array();
    for (i, v) in flat.iter().enumerate() {
        assert_eq!(*v, i as f32);
    }
    let flat3: [f64; 9] = Mat3::from(m).to_cols_array();
    assert_eq!(flat3, [0.0, 1.0, 2.0, 4.0, 5.0, 6.0, 8.0, 9.0, 10.0]);
    let flat2: [i32; 4] = Mat2::from(m).to_cols_array();
    assert_eq!(flat2, [0, 1, 4, 5]);
}
