use crate::mesh::LineVertex;

// Corner `i` has bit 0 → +x, bit 1 → +y, bit 2 → +z.
const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Edges of a cube with side `size` centred on the origin, as a line list.
pub fn box_edges(size: f32) -> Vec<LineVertex> {
    let h = size * 0.5;
    let corner = |i: usize| LineVertex {
        position: [
            if i & 1 != 0 { h } else { -h },
            if i & 2 != 0 { h } else { -h },
            if i & 4 != 0 { h } else { -h },
        ],
    };
    EDGES
        .iter()
        .flat_map(|&(a, b)| [corner(a), corner(b)])
        .collect()
}
