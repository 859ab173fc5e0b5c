use crate::constants::{BEVEL_OFFSET, BEVEL_SEGMENTS, BEVEL_SIZE, BEVEL_THICKNESS, TEXT_DEPTH};
use crate::mesh::MeshData;
use crate::typeface::Shape;
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("triangulation failed for a shape with {points} points")]
    Triangulation { points: usize },
}

/// Extrusion along +Z with an optional rounded bevel on both faces.
///
/// The solid spans `-bevel_thickness ..= depth + bevel_thickness`; the
/// straight wall runs from 0 to `depth` pushed out by `bevel_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtrudeParams {
    pub depth: f32,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub bevel_segments: usize,
}

impl ExtrudeParams {
    pub const LABEL: Self = Self {
        depth: TEXT_DEPTH,
        bevel_enabled: true,
        bevel_thickness: BEVEL_THICKNESS,
        bevel_size: BEVEL_SIZE,
        bevel_offset: BEVEL_OFFSET,
        bevel_segments: BEVEL_SEGMENTS,
    };

    /// `(z, outward offset)` for every ring of the side wall, in increasing z.
    fn layers(&self) -> Vec<(f32, f32)> {
        if !self.bevel_enabled || self.bevel_segments == 0 {
            return vec![(0.0, 0.0), (self.depth, 0.0)];
        }
        let segs = self.bevel_segments;
        let bevel = |b: usize| {
            let t = b as f32 / segs as f32;
            (
                self.bevel_thickness * (t * FRAC_PI_2).cos(),
                self.bevel_size * (t * FRAC_PI_2).sin() + self.bevel_offset,
            )
        };
        let full = self.bevel_size + self.bevel_offset;
        let mut layers = Vec::with_capacity(2 * segs + 2);
        layers.extend((0..segs).map(|b| {
            let (z, bs) = bevel(b);
            (-z, bs)
        }));
        layers.push((0.0, full));
        layers.push((self.depth, full));
        layers.extend((0..segs).rev().map(|b| {
            let (z, bs) = bevel(b);
            (self.depth + z, bs)
        }));
        layers
    }
}

/// Extrude every shape into one mesh. Shapes that fail to triangulate are
/// skipped with a warning.
pub fn extrude_shapes(shapes: &[Shape], params: &ExtrudeParams) -> MeshData {
    let mut mesh = MeshData::default();
    for shape in shapes {
        if let Err(e) = extrude_shape(shape, params, &mut mesh) {
            log::warn!("[extrude] {}", e);
        }
    }
    mesh
}

pub fn extrude_shape(
    shape: &Shape,
    params: &ExtrudeParams,
    mesh: &mut MeshData,
) -> Result<(), MeshError> {
    let layers = params.layers();
    let (z_back, off_back) = layers[0];
    let (z_front, off_front) = layers[layers.len() - 1];

    let rings: Vec<&[Vec2]> = std::iter::once(shape.outer.as_slice())
        .chain(shape.holes.iter().map(|h| h.as_slice()))
        .collect();
    let bevel_dirs: Vec<Vec<Vec2>> = rings.iter().map(|r| bevel_directions(r)).collect();

    // Caps
    let cap = triangulate(&rings)?;
    let flat: Vec<(Vec2, Vec2)> = rings
        .iter()
        .zip(&bevel_dirs)
        .flat_map(|(r, d)| r.iter().copied().zip(d.iter().copied()))
        .collect();
    for tri in cap.chunks_exact(3) {
        let [a, b, c] = [flat[tri[0]], flat[tri[1]], flat[tri[2]]];
        // counter-clockwise seen from +Z
        let (a, b, c) = if (b.0 - a.0).perp_dot(c.0 - a.0) < 0.0 {
            (a, c, b)
        } else {
            (a, b, c)
        };
        let at = |p: (Vec2, Vec2), off: f32, z: f32| (p.0 + p.1 * off).extend(z);
        mesh.push_triangle(
            at(a, off_front, z_front),
            at(b, off_front, z_front),
            at(c, off_front, z_front),
            Vec3::Z,
        );
        mesh.push_triangle(
            at(a, off_back, z_back),
            at(c, off_back, z_back),
            at(b, off_back, z_back),
            Vec3::NEG_Z,
        );
    }

    // Side walls, one band per pair of consecutive layers
    for (ring, dirs) in rings.iter().zip(&bevel_dirs) {
        let n = ring.len();
        let at = |i: usize, layer: (f32, f32)| (ring[i] + dirs[i] * layer.1).extend(layer.0);
        for band in layers.windows(2) {
            for i in 0..n {
                let j = (i + 1) % n;
                let a = at(i, band[0]);
                let b = at(j, band[0]);
                let c = at(j, band[1]);
                let d = at(i, band[1]);
                let normal = (c - a).cross(d - b).normalize_or_zero();
                mesh.push_quad(a, b, c, d, normal);
            }
        }
    }
    Ok(())
}

fn triangulate(rings: &[&[Vec2]]) -> Result<Vec<usize>, MeshError> {
    let points: usize = rings.iter().map(|r| r.len()).sum();
    let mut data = Vec::with_capacity(points * 2);
    let mut hole_indices = Vec::with_capacity(rings.len().saturating_sub(1));
    for (k, ring) in rings.iter().enumerate() {
        if k > 0 {
            hole_indices.push(data.len() / 2);
        }
        data.extend(ring.iter().flat_map(|p| [p.x as f64, p.y as f64]));
    }
    earcutr::earcut(&data, &hole_indices, 2).map_err(|_| MeshError::Triangulation { points })
}

/// Per-vertex outward offset direction, scaled so that moving a vertex by
/// `dir * d` moves both adjacent edges outward by `d`. Expects outer rings
/// counter-clockwise and holes clockwise.
pub fn bevel_directions(ring: &[Vec2]) -> Vec<Vec2> {
    const MAX_MITER: f32 = 4.0;
    let n = ring.len();
    (0..n)
        .map(|i| {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            let e1 = (ring[i] - prev).normalize_or_zero();
            let e2 = (next - ring[i]).normalize_or_zero();
            let n1 = Vec2::new(e1.y, -e1.x);
            let n2 = Vec2::new(e2.y, -e2.x);
            let denom = 1.0 + n1.dot(n2);
            if denom < 1e-4 {
                return n1;
            }
            (n1 + n2) / denom
        })
        .map(|v| v.clamp_length_max(MAX_MITER))
        .collect()
}
