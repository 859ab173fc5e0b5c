mod common;

use common::assert_close;
use glam::{Vec2, Vec3};
use landing_core::extrude::{bevel_directions, extrude_shape};
use landing_core::{extrude_shapes, ExtrudeParams, MeshData, Shape};
use smallvec::smallvec;

fn unit_square() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ]
}

fn flat(depth: f32) -> ExtrudeParams {
    ExtrudeParams {
        depth,
        bevel_enabled: false,
        ..ExtrudeParams::LABEL
    }
}

#[test]
fn flat_square_prism() {
    let shape = Shape {
        outer: unit_square(),
        holes: smallvec![],
    };
    let mut mesh = MeshData::default();
    extrude_shape(&shape, &flat(0.5), &mut mesh).expect("triangulates");
    // 2 cap triangles per face, 4 walls of 2 triangles
    assert_eq!(mesh.triangle_count(), 2 * 2 + 4 * 2);
    let (lo, hi) = mesh.bounds().expect("non-empty");
    assert_eq!(lo, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(hi, Vec3::new(1.0, 1.0, 0.5));
}

#[test]
fn cap_normals_face_out_and_match_winding() {
    let shape = Shape {
        outer: unit_square(),
        holes: smallvec![],
    };
    let mesh = extrude_shapes(&[shape], &flat(0.5));
    for tri in mesh.indices.chunks_exact(3) {
        let p = |k: usize| Vec3::from_array(mesh.vertices[tri[k] as usize].position);
        let n = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
        let geometric = (p(1) - p(0)).cross(p(2) - p(0)).normalize();
        assert!(
            geometric.dot(n) > 0.99,
            "triangle winding disagrees with normal {n}"
        );
    }
}

#[test]
fn wall_normals_point_away_from_solid() {
    let shape = Shape {
        outer: unit_square(),
        holes: smallvec![],
    };
    let mesh = extrude_shapes(&[shape], &flat(0.5));
    let centre = Vec3::new(0.5, 0.5, 0.25);
    for v in &mesh.vertices {
        let n = Vec3::from_array(v.normal);
        if n.z.abs() > 0.5 {
            continue;
        }
        let out = Vec3::from_array(v.position) - centre;
        assert!(out.dot(n) > 0.0, "inward wall normal {n}");
    }
}

#[test]
fn hole_is_not_capped() {
    let hole = vec![
        Vec2::new(0.25, 0.25),
        Vec2::new(0.25, 0.75),
        Vec2::new(0.75, 0.75),
        Vec2::new(0.75, 0.25),
    ];
    let shape = Shape {
        outer: unit_square(),
        holes: smallvec![hole],
    };
    let mesh = extrude_shapes(&[shape], &flat(0.5));
    // square ring needs 8 cap triangles per face; 8 wall quads
    assert_eq!(mesh.triangle_count(), 8 * 2 + 8 * 2);
    let centre = Vec2::new(0.5, 0.5);
    for tri in mesh.indices.chunks_exact(3) {
        let c = tri
            .iter()
            .map(|&i| Vec3::from_array(mesh.vertices[i as usize].position).truncate())
            .sum::<Vec2>()
            / 3.0;
        assert!(c.distance(centre) > 0.2, "triangle covers the hole at {c}");
    }
}

#[test]
fn bevel_widens_middle_and_thickens_faces() {
    let shape = Shape {
        outer: unit_square(),
        holes: smallvec![],
    };
    let params = ExtrudeParams::LABEL;
    let mesh = extrude_shapes(&[shape], &params);
    let (lo, hi) = mesh.bounds().expect("non-empty");
    assert_close(lo.z, -params.bevel_thickness, 1e-6);
    assert_close(hi.z, params.depth + params.bevel_thickness, 1e-6);
    assert_close(lo.x, -params.bevel_size, 1e-5);
    assert_close(hi.x, 1.0 + params.bevel_size, 1e-5);
    // caps use the unbevelled outline
    for v in &mesh.vertices {
        if v.normal == [0.0, 0.0, 1.0] {
            assert!(v.position[0] >= -1e-6 && v.position[0] <= 1.0 + 1e-6);
        }
    }
}

#[test]
fn bevel_directions_are_outward_mitres() {
    let dirs = bevel_directions(&unit_square());
    assert!((dirs[0] - Vec2::new(-1.0, -1.0)).length() < 1e-6);
    assert!((dirs[2] - Vec2::new(1.0, 1.0)).length() < 1e-6);
}

#[test]
fn collinear_outline_does_not_panic() {
    let shape = Shape {
        outer: vec![Vec2::ZERO, Vec2::X, Vec2::new(2.0, 0.0)],
        holes: smallvec![],
    };
    let mesh = extrude_shapes(&[shape], &flat(1.0));
    // collinear outline: no cap area, only walls
    assert!(mesh.indices.len() % 3 == 0);
}
