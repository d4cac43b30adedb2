//! Benchmarks for glsm operations.
//!
//! Run with: `cargo bench -p glsm-bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use glsm_math::camera::{calculate_ray, perspective_projection};
use glsm_math::{Mat3, Mat4, Vec2, Vec3, Vec4, Viewport};
use glsm_mesh::{TerrainParams, grid_indices, grid_vertices, terrain_vertices};
use glsm_noise::{Fbm, Perlin, noise2d, noise3d};

/// Benchmark single noise samples and octave sums.
fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");
    let n = 10_000;
    let coords: Vec<f32> = (0..n).map(|i| i as f32 * 0.173 - 500.0).collect();
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function("noise2d", |b| {
        b.iter(|| coords.iter().map(|&x| noise2d(black_box(x), 0.37)).sum::<f32>())
    });

    group.bench_function("noise3d", |b| {
        b.iter(|| coords.iter().map(|&x| noise3d(black_box(x), 0.37, -x)).sum::<f32>())
    });

    let perlin = Perlin::new(9);
    for octaves in [1u32, 4, 8] {
        let fbm = Fbm::new(octaves);
        group.bench_with_input(BenchmarkId::new("fbm2", octaves), &fbm, |b, f| {
            b.iter(|| coords.iter().map(|&x| perlin.fbm2(black_box(x), 0.37, f)).sum::<f32>())
        });
    }

    group.bench_function("table_build", |b| b.iter(|| Perlin::new(black_box(17))));

    group.finish();
}

/// Benchmark matrix inversion and products against glam.
fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");

    let mut m4 = Mat4::rotation(37.0, Vec3::new(1.0, 2.0, -0.5));
    m4.translate(3.0, -1.0, 2.0);
    let g4 = glam::DMat4::from(m4);
    let m3 = Mat3::from(m4);
    let v = Vec4::new(1.0, 2.0, 3.0, 1.0);

    group.bench_function("mat4_inverse", |b| b.iter(|| black_box(m4).inverse()));
    group.bench_function("glam_dmat4_inverse", |b| b.iter(|| black_box(g4).inverse()));
    group.bench_function("mat3_inverse", |b| b.iter(|| black_box(m3).inverse()));
    group.bench_function("mat4_mul_mat4", |b| b.iter(|| black_box(m4) * black_box(m4)));
    group.bench_function("mat4_mul_vec4", |b| b.iter(|| black_box(m4) * black_box(v)));
    group.bench_function("mat4_slerp", |b| {
        let other = Mat4::rotation(-80.0, Vec3::Y);
        b.iter(|| black_box(m4).slerp(&other, 0.3))
    });

    group.finish();
}

/// Benchmark pixel unprojection.
fn bench_camera(c: &mut Criterion) {
    let view = Mat4::rotation(20.0, Vec3::X) * Mat4::translation(0.0, 0.0, -5.0);
    let proj = perspective_projection(60.0, 16.0 / 9.0, 0.1, 100.0);
    let vp = Viewport::new(1920, 1080);

    c.bench_function("calculate_ray", |b| {
        b.iter(|| calculate_ray(black_box(Vec2::new(960.0, 540.0)), &view, &proj, vp))
    });
}

/// Benchmark grid construction.
fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for res in [32u32, 127, 256] {
        let verts = (res as u64 + 1).pow(2);
        group.throughput(Throughput::Elements(verts));

        group.bench_with_input(BenchmarkId::new("wave_vertices", res), &res, |b, &r| {
            b.iter(|| grid_vertices(r, black_box(0.5)))
        });
        group.bench_with_input(BenchmarkId::new("indices", res), &res, |b, &r| {
            b.iter(|| grid_indices(black_box(r)))
        });
    }

    let perlin = Perlin::global();
    let params = TerrainParams::default();
    group.bench_function("terrain_127", |b| {
        b.iter(|| terrain_vertices(black_box(127), perlin, &params))
    });

    group.finish();
}

criterion_group!(benches, bench_noise, bench_matrix, bench_camera, bench_grid);

criterion_main!(benches);
