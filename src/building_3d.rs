// The solid kernel: ordered footprint + roof parameters -> closed CityJSON solid

use crate::cityjson::{CityJsonGeometry, Semantics, Shell, building_surfaces};
use crate::kernel_in::{BuildingSpec, Point3D, RoofShape, ValidationError};
use crate::roof_tables;

pub static LOD: &str = "2";

/// A built solid, still carrying its own world-space vertex list. The feature
/// assembler hoists the vertices into the host document frame later.
#[derive(Clone, Debug)]
pub struct BuildingSolid {
    /// Always the Solid variant, one outer shell, semantics attached
    pub geometry: CityJsonGeometry,
    /// World space, quantized to 3 decimals
    pub vertices: Vec<Point3D>,
}

/// Builds the boundary representation of one building. Pure and
/// deterministic: identical input gives byte-identical output.
///
/// The corners must already be in one rotational order (see
/// `order_by_bearing`) and coplanar; the base height is taken from the
/// first corner.
pub fn build_solid(
    corners: &[Point3D],
    spec: &BuildingSpec,
) -> Result<BuildingSolid, ValidationError> {
    if corners.len() != 4 {
        return Err(ValidationError::CornerCount(corners.len()));
    }
    if spec.height <= 0.0 {
        return Err(ValidationError::NonPositiveHeight(spec.height));
    }
    if spec.roof_shape != RoofShape::Flat && spec.orientation > 3 {
        return Err(ValidationError::OrientationOutOfRange(spec.orientation));
    }

    let wall_height = if spec.roof_shape == RoofShape::Flat {
        spec.height
    } else {
        spec.height - spec.roof_height
    };
    let base_height = corners[0].z;

    let mut vertices: Vec<Point3D> = corners.to_vec();
    push_roof_vertices(&mut vertices, corners, spec, wall_height, base_height);

    let table = roof_tables::topology(spec.roof_shape, spec.orientation);
    debug_assert_eq!(vertices.len(), table.vertex_count);

    // quantize as the last geometry step, repeated runs are byte-identical
    for vertex in &mut vertices {
        *vertex = vertex.quantized();
    }

    let shell: Shell = table
        .faces
        .iter()
        .map(|ring| vec![ring.to_vec()])
        .collect();
    let values: Vec<Option<usize>> = table.surface_values.iter().map(|&v| Some(v)).collect();

    let geometry = CityJsonGeometry::Solid {
        lod: LOD.to_string(),
        boundaries: vec![shell],
        // one values row per shell, this kernel only ever emits one shell
        semantics: Some(Semantics {
            surfaces: building_surfaces(),
            values: vec![values],
        }),
    };

    Ok(BuildingSolid { geometry, vertices })
}

// The extra vertices appended behind the 4 base corners, as the topology
// table of the archetype expects them.
fn push_roof_vertices(
    vertices: &mut Vec<Point3D>,
    corners: &[Point3D],
    spec: &BuildingSpec,
    wall_height: f64,
    base_height: f64,
) {
    let top_height = base_height + spec.height;

    match spec.roof_shape {
        RoofShape::Flat => {
            for corner in corners {
                vertices.push(corner.with_z(top_height));
            }
        }

        RoofShape::Monopitch => {
            // two corners stay at wall height, the slope rises to the other two
            for (index, corner) in corners.iter().enumerate() {
                let index = index as u8;
                let height =
                    if index == spec.orientation || index == (spec.orientation + 1) % 4 {
                        wall_height
                    } else {
                        spec.height
                    };
                vertices.push(corner.with_z(base_height + height));
            }
        }

        RoofShape::Dualpent => {
            for corner in corners {
                vertices.push(corner.with_z(base_height + wall_height));
            }
            // the eaves of the two opposing pents meet a third of the roof down
            let middle_height = base_height + spec.height - spec.roof_height / 3.;
            let (center_0, center_1) = if spec.orientation % 2 == 0 {
                (
                    corners[1].midpoint_2d(&corners[2]),
                    corners[3].midpoint_2d(&corners[0]),
                )
            } else {
                (
                    corners[2].midpoint_2d(&corners[3]),
                    corners[0].midpoint_2d(&corners[1]),
                )
            };
            vertices.push(center_0.with_z(middle_height));
            vertices.push(center_0.with_z(top_height));
            vertices.push(center_1.with_z(middle_height));
            vertices.push(center_1.with_z(top_height));
        }

        RoofShape::Gabled => {
            for corner in corners {
                vertices.push(corner.with_z(base_height + wall_height));
            }
            let (center_0, center_1) = if spec.orientation % 2 == 0 {
                (
                    corners[1].midpoint_2d(&corners[2]),
                    corners[0].midpoint_2d(&corners[3]),
                )
            } else {
                (
                    corners[0].midpoint_2d(&corners[1]),
                    corners[2].midpoint_2d(&corners[3]),
                )
            };
            vertices.push(center_0.with_z(top_height));
            vertices.push(center_1.with_z(top_height));
        }

        RoofShape::Hipped => {
            for corner in corners {
                vertices.push(corner.with_z(base_height + wall_height));
            }
            let (ridge_start, ridge_end) = hipped_ridge(corners, top_height);
            vertices.push(ridge_start);
            vertices.push(ridge_end);
        }

        RoofShape::Pavilion => {
            for corner in corners {
                vertices.push(corner.with_z(base_height + wall_height));
            }
            let apex = corners[0].midpoint_2d(&corners[2]);
            vertices.push(apex.with_z(top_height));
        }
    }
}

// The hipped ridge is derived from the footprint geometry alone: it runs
// parallel to the longer pair of opposite edges, centered on the footprint,
// and shortens by the short side length (ridge = long - short). Mind that
// the orientation parameter is NOT used here, unlike all other sloped roofs.
fn hipped_ridge(corners: &[Point3D], ridge_height: f64) -> (Point3D, Point3D) {
    let length_a = corners[0].distance_2d(&corners[1]);
    let length_b = corners[1].distance_2d(&corners[2]);
    let ridge_runs_parallel_to_side_a = length_a >= length_b;

    let long_side = length_a.max(length_b);
    let short_side = length_a.min(length_b);
    let ridge_half_length = (long_side - short_side) / 2.;

    let (ridge_center, edge) = if ridge_runs_parallel_to_side_a {
        (
            corners[0]
                .midpoint_2d(&corners[3])
                .midpoint_2d(&corners[1].midpoint_2d(&corners[2])),
            corners[1] - corners[0],
        )
    } else {
        (
            corners[0]
                .midpoint_2d(&corners[1])
                .midpoint_2d(&corners[2].midpoint_2d(&corners[3])),
            corners[2] - corners[1],
        )
    };

    let edge_length = f64::sqrt(edge.x * edge.x + edge.y * edge.y);
    let unit_x = edge.x / edge_length;
    let unit_y = edge.y / edge_length;

    let ridge_start = Point3D {
        x: ridge_center.x - unit_x * ridge_half_length,
        y: ridge_center.y - unit_y * ridge_half_length,
        z: ridge_height,
    };
    let ridge_end = Point3D {
        x: ridge_center.x + unit_x * ridge_half_length,
        y: ridge_center.y + unit_y * ridge_half_length,
        z: ridge_height,
    };
    (ridge_start, ridge_end)
}
