//! Check command
//!
//! Runs the kernel's numeric invariants on fixed samples and reports each
//! one. Exits with an error if any check fails.

use anyhow::{Result, bail};
use glsm_math::camera::perspective_projection;
use glsm_math::{Axis, Mat2, Mat3, Mat4, Matrix, Vec2, Vec3, Vec4};
use serde::Serialize;
use tracing::{debug, warn};

use crate::CheckArgs;

/// Outcome of one check.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

type CheckFn = fn() -> std::result::Result<(), String>;

const CHECKS: &[(&str, CheckFn)] = &[
    ("inverse round trip", inverse_round_trip),
    ("row vector product", row_vector_product),
    ("reference products", reference_products),
    ("normalize", normalize),
    ("reflect", reflect),
    ("zero-angle rotation", zero_rotation),
    ("camera position round trip", camera_position),
    ("column-major flatten", column_major),
    ("swizzle", swizzle),
    ("singular matrix", singular),
    ("glam cross-check", glam_cross_check),
    ("noise period", noise_period),
    ("noise lattice zeros", noise_lattice),
];

/// Runs every check.
pub fn run_all() -> Vec<CheckResult> {
    CHECKS
        .iter()
        .map(|&(name, check)| {
            let outcome = check();
            debug!(check = name, ok = outcome.is_ok(), "ran check");
            CheckResult {
                name,
                passed: outcome.is_ok(),
                detail: outcome.err(),
            }
        })
        .collect()
}

pub fn run(args: CheckArgs, verbose: u8) -> Result<()> {
    let results = run_all();
    let failed = results.iter().filter(|r| !r.passed).count();

    if args.json {
        super::print_json(&results)?;
    } else {
        for r in &results {
            match &r.detail {
                None if verbose > 0 || failed > 0 => println!("ok    {}", r.name),
                None => {}
                Some(d) => println!("FAIL  {}: {}", r.name, d),
            }
        }
        println!("{} of {} checks passed", results.len() - failed, results.len());
    }

    if failed > 0 {
        warn!(failed, "numeric checks failed");
        bail!("{} of {} checks failed", failed, results.len());
    }
    Ok(())
}

fn ensure(ok: bool, what: impl FnOnce() -> String) -> std::result::Result<(), String> {
    if ok { Ok(()) } else { Err(what()) }
}

fn mat4_sample() -> Mat4 {
    Mat4::from_cols([
        [1.0, 2.0, 3.0, 4.0],
        [6.0, 5.0, 4.0, 3.0],
        [7.0, 9.0, 8.0, 6.0],
        [9.0, 6.0, 3.0, 2.0],
    ])
}

fn near_identity<const N: usize>(m: Matrix<f64, N>) -> std::result::Result<(), String> {
    let err = m.max_abs_diff(&Matrix::identity());
    ensure(err < 1e-9, || format!("{}x{} product is off identity by {:e}", N, N, err))
}

fn inverse_round_trip() -> std::result::Result<(), String> {
    let m2 = Mat2::from_cols([[1.0, 2.0], [4.0, 3.0]]);
    near_identity(m2 * m2.inverse())?;
    let m3 = Mat3::rotation(33.0, Vec3::new(1.0, -2.0, 0.5)) * 2.5;
    near_identity(m3 * m3.inverse())?;
    let m4 = mat4_sample();
    near_identity(m4 * m4.inverse())?;
    let p = perspective_projection(60.0, 1.5, 0.1, 100.0);
    near_identity(p.inverse() * p)
}

fn row_vector_product() -> std::result::Result<(), String> {
    let m = mat4_sample();
    let a = Vec4::new(0.5, -1.0, 2.0, 3.0);
    ensure(a * m == m.transpose() * a, || format!("{:?} vs {:?}", a * m, m.transpose() * a))
}

fn reference_products() -> std::result::Result<(), String> {
    let m = Mat2::from_cols([[1.0, 2.0], [4.0, 3.0]]);
    let a = Vec2::new(1.0, 2.0);
    ensure(m * a == Vec2::new(9.0, 8.0), || format!("mat2 * vec2 = {:?}", m * a))?;
    ensure(a * m == Vec2::new(5.0, 10.0), || format!("vec2 * mat2 = {:?}", a * m))?;

    let m = Mat3::from_cols([[1.0, 2.0, 3.0], [6.0, 5.0, 4.0], [7.0, 9.0, 8.0]]);
    let a = Vec3::new(1.0, 2.0, 3.0);
    ensure(m * a == Vec3::new(34.0, 39.0, 35.0), || format!("mat3 * vec3 = {:?}", m * a))?;
    ensure(a * m == Vec3::new(14.0, 28.0, 49.0), || format!("vec3 * mat3 = {:?}", a * m))?;

    let m = mat4_sample();
    let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
    ensure(m * a == Vec4::new(70.0, 63.0, 47.0, 36.0), || format!("mat4 * vec4 = {:?}", m * a))?;
    ensure(a * m == Vec4::new(30.0, 40.0, 73.0, 38.0), || format!("vec4 * mat4 = {:?}", a * m))
}

fn normalize() -> std::result::Result<(), String> {
    let v = Vec3::<f64>::new(3.0, -4.0, 12.0);
    let n = v.normalize();
    ensure((n.length() - 1.0).abs() < 1e-12, || format!("|n| = {}", n.length()))?;
    ensure((n.normalize() - n).length() < 1e-15, || "normalize is not idempotent".into())?;
    ensure(Vec3::<f64>::ZERO.normalize() == Vec3::ZERO, || "zero vector did not stay zero".into())
}

fn reflect() -> std::result::Result<(), String> {
    let n = Vec3::new(1.0, 2.0, 2.0).normalize();
    let r = n.reflect(n);
    ensure((r + n).length() < 1e-15, || format!("reflect(n, n) = {r:?}"))
}

fn zero_rotation() -> std::result::Result<(), String> {
    let axis = Vec3::new(0.3, -1.0, 2.0);
    let err = Mat4::rotation(0.0, axis).max_abs_diff(&Mat4::identity());
    ensure(err < 1e-15, || format!("off identity by {err:e}"))?;
    ensure(Mat3::rotation(45.0, Vec3::ZERO) == Mat3::identity(), || {
        "zero axis did not give identity".into()
    })
}

fn camera_position() -> std::result::Result<(), String> {
    let mut view = Mat4::rotation(-70.0, Vec3::new(1.0, 1.0, 0.0));
    let p = Vec3::new(4.0, -2.0, 9.5);
    view.set_camera_position(p);
    let q = view.camera_position();
    ensure((q - p).length() < 1e-9, || format!("set {p:?}, got {q:?}"))
}

fn column_major() -> std::result::Result<(), String> {
    let m = Mat4::from_rows([
        [0.0, 4.0, 8.0, 12.0],
        [1.0, 5.0, 9.0, 13.0],
        [2.0, 6.0, 10.0, 14.0],
        [3.0, 7.0, 11.0, 15.0],
    ]);
    let flat: [f32; 16] = m.to_cols_array();
    ensure(flat.iter().enumerate().all(|(i, v)| *v == i as f32), || {
        format!("flattened as {flat:?}")
    })
}

fn swizzle() -> std::result::Result<(), String> {
    let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    let s = v.swizzle([Axis::W, Axis::X, Axis::X]);
    ensure(s == Vec3::new(4.0, 1.0, 1.0), || format!("wxx = {s:?}"))?;
    ensure(Vec2::new(1.0, 2.0).try_swizzle([Axis::Z]).is_err(), || {
        "out-of-range axis accepted".into()
    })
}

fn singular() -> std::result::Result<(), String> {
    let m = Mat3::from_cols([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 0.0]]);
    ensure(m.try_inverse().is_err(), || "singular matrix inverted".into())?;
    ensure(!m.inverse().is_finite(), || "singular inverse is finite".into())
}

fn glam_cross_check() -> std::result::Result<(), String> {
    let m = mat4_sample();
    let ours = m.inverse();
    let theirs = Mat4::from(glam::DMat4::from(m).inverse());
    let err = ours.max_abs_diff(&theirs);
    ensure(err < 1e-12, || format!("inverse differs from glam by {err:e}"))
}

fn noise_period() -> std::result::Result<(), String> {
    for x in [0.25f32, -3.5, 17.125] {
        let (a, b) = (glsm_noise::noise1d(x), glsm_noise::noise1d(x + 256.0));
        ensure(a == b, || format!("noise1d({x}) = {a}, noise1d({x} + 256) = {b}"))?;
        let (a, b) = (glsm_noise::noise3d(x, 0.5, 1.5), glsm_noise::noise3d(x, 0.5, 257.5));
        ensure(a == b, || format!("noise3d period broken at x = {x}"))?;
    }
    Ok(())
}

fn noise_lattice() -> std::result::Result<(), String> {
    for i in -2..3 {
        let x = i as f32;
        let v = glsm_noise::noise3d(x, x + 1.0, 7.0);
        ensure(v == 0.0, || format!("noise3d at lattice point {x} = {v}"))?;
    }
    Ok(())
}
