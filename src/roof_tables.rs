// Fixed roof topologies, one data table per archetype variant.
//
// Vertex index layout, shared by all tables:
//   0..=3   footprint corners (base ring)
//   4..=7   top/wall-top ring above the corners
//   8..     ridge, eave-middle or apex points of the roof
//
// The tables are pure index data; building the matching vertex list is the
// job of building_3d. Each table is verified to close by the tests below.

use crate::kernel_in::RoofShape;

/// One roof archetype variant: face rings over the vertex index layout plus
/// the semantic surface class per face (0 = ground, 1 = wall, 2 = roof).
pub struct RoofTopology {
    pub vertex_count: usize,
    pub faces: &'static [&'static [usize]],
    pub surface_values: &'static [usize],
}

// Flat and monopitch share the box topology, only the top ring heights differ.
static PRISM: RoofTopology = RoofTopology {
    vertex_count: 8,
    faces: &[
        &[0, 1, 2, 3],
        &[0, 4, 5, 1],
        &[1, 5, 6, 2],
        &[2, 6, 7, 3],
        &[3, 7, 4, 0],
        &[4, 7, 6, 5],
    ],
    surface_values: &[0, 1, 1, 1, 1, 2],
};

// Dualpent: 8..=11 are two eave-middle points and two apex points over the
// midpoints of one opposite edge pair. Four index layouts, one per orientation.
static DUALPENT_0: RoofTopology = RoofTopology {
    vertex_count: 12,
    faces: &[
        &[0, 1, 2, 3],
        &[0, 4, 5, 1],
        &[1, 5, 9, 8, 6, 2],
        &[2, 6, 7, 3],
        &[3, 7, 10, 11, 4, 0],
        &[8, 9, 11, 10],
        &[4, 11, 9, 5],
        &[6, 8, 10, 7],
    ],
    surface_values: &[0, 1, 1, 1, 1, 1, 2, 2],
};

static DUALPENT_2: RoofTopology = RoofTopology {
    vertex_count: 12,
    faces: &[
        &[0, 1, 2, 3],
        &[0, 4, 5, 1],
        &[1, 5, 8, 9, 6, 2],
        &[2, 6, 7, 3],
        &[3, 7, 11, 10, 4, 0],
        &[10, 11, 9, 8],
        &[4, 10, 8, 5],
        &[6, 9, 11, 7],
    ],
    surface_values: &[0, 1, 1, 1, 1, 1, 2, 2],
};

static DUALPENT_1: RoofTopology = RoofTopology {
    vertex_count: 12,
    faces: &[
        &[0, 1, 2, 3],
        &[0, 4, 10, 11, 5, 1],
        &[1, 5, 6, 2],
        &[2, 6, 9, 8, 7, 3],
        &[3, 7, 4, 0],
        &[8, 9, 11, 10],
        &[7, 8, 10, 4],
        &[5, 11, 9, 6],
    ],
    surface_values: &[0, 1, 1, 1, 1, 1, 2, 2],
};

static DUALPENT_3: RoofTopology = RoofTopology {
    vertex_count: 12,
    faces: &[
        &[0, 1, 2, 3],
        &[0, 4, 11, 10, 5, 1],
        &[1, 5, 6, 2],
        &[2, 6, 8, 9, 7, 3],
        &[3, 7, 4, 0],
        &[10, 11, 9, 8],
        &[7, 9, 11, 4],
        &[5, 10, 8, 6],
    ],
    surface_values: &[0, 1, 1, 1, 1, 1, 2, 2],
};

// Gabled: 8 and 9 are the two ridge apex points over one edge pair.
static GABLED_EVEN: RoofTopology = RoofTopology {
    vertex_count: 10,
    faces: &[
        &[0, 1, 2, 3],
        &[0, 4, 5, 1],
        &[1, 5, 8, 6, 2],
        &[2, 6, 7, 3],
        &[3, 7, 9, 4, 0],
        &[4, 9, 8, 5],
        &[6, 8, 9, 7],
    ],
    surface_values: &[0, 1, 1, 1, 1, 2, 2],
};

static GABLED_ODD: RoofTopology = RoofTopology {
    vertex_count: 10,
    faces: &[
        &[0, 1, 2, 3],
        &[0, 1, 5, 8, 4],
        &[1, 2, 6, 5],
        &[2, 3, 7, 9, 6],
        &[3, 0, 4, 7],
        &[4, 8, 9, 7],
        &[5, 6, 9, 8],
    ],
    surface_values: &[0, 1, 1, 1, 1, 2, 2],
};

// Hipped: 8 and 9 are the ridge start and end, placed by edge-length geometry.
static HIPPED: RoofTopology = RoofTopology {
    vertex_count: 10,
    faces: &[
        &[0, 1, 2, 3],
        &[0, 4, 5, 1],
        &[1, 5, 6, 2],
        &[2, 6, 7, 3],
        &[3, 7, 4, 0],
        &[4, 8, 5],
        &[5, 8, 9, 6],
        &[6, 9, 7],
        &[7, 9, 8, 4],
    ],
    surface_values: &[0, 1, 1, 1, 1, 2, 2, 2, 2],
};

// Pavilion: 8 is the single apex over the footprint diagonal midpoint.
static PAVILION: RoofTopology = RoofTopology {
    vertex_count: 9,
    faces: &[
        &[0, 1, 2, 3],
        &[0, 4, 5, 1],
        &[1, 5, 6, 2],
        &[2, 6, 7, 3],
        &[3, 7, 4, 0],
        &[4, 5, 8],
        &[5, 6, 8],
        &[6, 7, 8],
        &[7, 4, 8],
    ],
    surface_values: &[0, 1, 1, 1, 1, 2, 2, 2, 2],
};

/// Selects the topology table for a roof archetype. The orientation must
/// already be validated to 0..=3; only dualpent and gabled depend on it.
pub fn topology(roof_shape: RoofShape, orientation: u8) -> &'static RoofTopology {
    match roof_shape {
        RoofShape::Flat | RoofShape::Monopitch => &PRISM,
        RoofShape::Dualpent => match orientation {
            0 => &DUALPENT_0,
            1 => &DUALPENT_1,
            2 => &DUALPENT_2,
            _ => &DUALPENT_3,
        },
        RoofShape::Gabled => {
            if orientation % 2 == 0 {
                &GABLED_EVEN
            } else {
                &GABLED_ODD
            }
        }
        RoofShape::Hipped => &HIPPED,
        RoofShape::Pavilion => &PAVILION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    static ALL_SHAPES: [RoofShape; 6] = [
        RoofShape::Flat,
        RoofShape::Monopitch,
        RoofShape::Dualpent,
        RoofShape::Gabled,
        RoofShape::Hipped,
        RoofShape::Pavilion,
    ];

    fn all_variants() -> Vec<&'static RoofTopology> {
        let mut variants = Vec::new();
        for shape in ALL_SHAPES {
            for orientation in 0..4 {
                let variant = topology(shape, orientation);
                if !variants
                    .iter()
                    .any(|known: &&RoofTopology| std::ptr::eq(*known, variant))
                {
                    variants.push(variant);
                }
            }
        }
        variants
    }

    /// Every vertex index of every face ring stays inside the vertex list.
    #[test]
    fn indices_in_range() {
        for table in all_variants() {
            for face in table.faces {
                for &index in *face {
                    assert!(index < table.vertex_count);
                }
            }
        }
    }

    /// One semantic surface class per face.
    #[test]
    fn one_value_per_face() {
        for table in all_variants() {
            assert_eq!(table.surface_values.len(), table.faces.len());
            for &value in table.surface_values {
                assert!(value <= 2);
            }
        }
    }

    /// A closed shell has every undirected edge shared by exactly two faces.
    #[test]
    fn every_table_closes() {
        for table in all_variants() {
            let mut edge_uses: HashMap<(usize, usize), usize> = HashMap::new();
            for face in table.faces {
                for (index, &start) in face.iter().enumerate() {
                    let end = face[(index + 1) % face.len()];
                    let edge = (start.min(end), start.max(end));
                    *edge_uses.entry(edge).or_insert(0) += 1;
                }
            }
            for (edge, uses) in edge_uses {
                assert_eq!(uses, 2, "dangling edge {edge:?}");
            }
        }
    }

    /// Every vertex of the layout is referenced by at least one face.
    #[test]
    fn no_orphan_vertices() {
        for table in all_variants() {
            for index in 0..table.vertex_count {
                assert!(
                    table.faces.iter().any(|face| face.contains(&index)),
                    "vertex {index} unused"
                );
            }
        }
    }
}
