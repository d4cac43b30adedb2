//! Building whole meshes through the public API.

use glsm_math::{Vec2, Vec3};
use glsm_mesh::{
    AttributeKind, MeshBuilder, MeshData, Mode, Primitive, VertexFormat, grid_indices,
    grid_vertices,
};

fn cube() -> MeshData {
    let faces = [
        (Vec3::Z, [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]]),
        (-Vec3::Z, [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]]),
        (Vec3::X, [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]]),
        (-Vec3::X, [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]]),
        (Vec3::Y, [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]]),
        (-Vec3::Y, [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]]),
    ];
    let uv = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut b = MeshBuilder::new(VertexFormat::XyzUvN);
    b.begin(Mode::Quads);
    for (n, corners) in faces {
        b.normal(n);
        for (p, t) in corners.iter().zip(uv) {
            b.texcoord(Vec2::from_array(t));
            b.vertex(Vec3::from_array(*p));
        }
    }
    b.end().unwrap();
    b.build()
}

#[test]
fn cube_from_quads() {
    let mesh = cube();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.primitive, Primitive::Triangles);
    assert_eq!(mesh.primitive_count(), 12);

    // Every vertex of a face carries its face normal
    for face in 0..6 {
        let n0 = mesh.attribute(face * 4, AttributeKind::Normal).unwrap().to_vec();
        for k in 1..4 {
            assert_eq!(mesh.attribute(face * 4 + k, AttributeKind::Normal).unwrap(), n0);
        }
    }
}

#[test]
fn cube_to_obj() {
    let mut buf = Vec::new();
    cube().write_obj(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 24);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 12);
    assert!(text.contains("f 1/1/1 2/2/2 4/4/4"));
}

#[test]
fn outline_with_line_loop() {
    let mut b = MeshBuilder::new(VertexFormat::Xyz);
    b.begin(Mode::LineLoop);
    for i in 0..8 {
        let a = i as f64 * std::f64::consts::TAU / 8.0;
        b.vertex(Vec2::new(a.cos(), a.sin()));
    }
    b.end().unwrap();
    let mesh = b.build();
    assert_eq!(mesh.primitive, Primitive::Lines);
    assert_eq!(mesh.primitive_count(), 8);
    assert_eq!(mesh.indices[14..], [7, 0]);
    // z is widened to zero
    assert_eq!(mesh.attribute(2, AttributeKind::Position).unwrap()[2], 0.0);
}

#[test]
fn grid_indices_stay_in_range() {
    for res in [1, 3, 16, 127] {
        let verts = grid_vertices(res, 0.25);
        let idx = grid_indices(res);
        assert_eq!(idx.len(), (res * res * 6) as usize);
        assert!(idx.iter().all(|&i| (i as usize) < verts.len()));
    }
}
