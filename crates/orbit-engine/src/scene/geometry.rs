use std::collections::HashSet;

/// Primitive assembly for a `MeshData` index buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    Triangles,
    Lines,
}

/// CPU-side mesh: positions plus 16-bit indices.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
    pub topology: Topology,
}

/// Geometry descriptor, centered on the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    /// Axis-aligned box.
    Box { width: f32, height: f32, depth: f32 },
    /// Rectangle in the XY plane facing +Z.
    Plane { width: f32, height: f32 },
}

impl Geometry {
    pub const fn unit_box() -> Self {
        Geometry::Box { width: 1.0, height: 1.0, depth: 1.0 }
    }

    /// Filled triangles, counter-clockwise when seen from outside.
    pub fn triangles(&self) -> MeshData {
        match *self {
            Geometry::Box { width, height, depth } => {
                let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);

                // Corner `i` has x/y/z at the max extent when bit 0/1/2 is set.
                let positions = (0..8u16)
                    .map(|i| {
                        [
                            if i & 1 != 0 { hx } else { -hx },
                            if i & 2 != 0 { hy } else { -hy },
                            if i & 4 != 0 { hz } else { -hz },
                        ]
                    })
                    .collect();

                const FACES: [[u16; 4]; 6] = [
                    [1, 3, 7, 5], // +X
                    [0, 4, 6, 2], // -X
                    [2, 6, 7, 3], // +Y
                    [0, 1, 5, 4], // -Y
                    [4, 5, 7, 6], // +Z
                    [0, 2, 3, 1], // -Z
                ];
                let indices = FACES
                    .iter()
                    .flat_map(|&[a, b, c, d]| [a, b, c, a, c, d])
                    .collect();

                MeshData { positions, indices, topology: Topology::Triangles }
            }

            Geometry::Plane { width, height } => {
                let (hx, hy) = (width * 0.5, height * 0.5);
                MeshData {
                    positions: vec![
                        [-hx, -hy, 0.0],
                        [hx, -hy, 0.0],
                        [hx, hy, 0.0],
                        [-hx, hy, 0.0],
                    ],
                    indices: vec![0, 1, 2, 0, 2, 3],
                    topology: Topology::Triangles,
                }
            }
        }
    }

    /// Every unique triangle edge as a line list, including face diagonals.
    pub fn wireframe(&self) -> MeshData {
        let tris = self.triangles();

        let mut seen = HashSet::new();
        let mut indices = Vec::new();
        for tri in tris.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let edge = (a.min(b), a.max(b));
                if seen.insert(edge) {
                    indices.extend([edge.0, edge.1]);
                }
            }
        }

        MeshData {
            positions: tris.positions,
            indices,
            topology: Topology::Lines,
        }
    }
}
