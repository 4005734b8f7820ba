// Outer SHAPE of the building: 4 corner points, normalized into one rotational order

use crate::kernel_in::Point3D;

/// Arithmetic mean of the ground (x,y) projections
pub fn centroid_2d(points: &[Point3D]) -> Point3D {
    let count = points.len() as f64;
    let mut center = Point3D::ZERO;
    for point in points {
        center.x += point.x;
        center.y += point.y;
    }
    center.x /= count;
    center.y /= count;
    center
}

/// Brings user-picked corner points (clicked on a map in any order) into a
/// clockwise-from-north rotation around their centroid. The fixed-index roof
/// topologies need corners 0..3 adjacent around the quad; unordered corners
/// would give twisted, self-intersecting walls.
///
/// Fewer than 2 points are returned unchanged.
pub fn order_by_bearing(points: &[Point3D]) -> Vec<Point3D> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let center = centroid_2d(points);

    let mut keyed: Vec<(f64, Point3D)> = points
        .iter()
        .map(|point| {
            let dx = point.x - center.x;
            let dy = point.y - center.y;

            // angle in degrees, 0 is east, counter-clockwise
            let mut angle = f64::atan2(dy, dx).to_degrees();
            angle = (angle + 360.) % 360.;
            // bearing: 0 is north, clockwise
            let bearing = (450. - angle) % 360.;

            // rotate the 0/360 seam out of the commonly used quadrant
            let sort_key = if bearing >= 270. {
                bearing - 270.
            } else {
                bearing + 90.
            };
            (sort_key, *point)
        })
        .collect();

    // sort_by is stable, ties keep their original relative order
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    keyed.into_iter().map(|(_, point)| point).collect()
}

/// Shoelace winding test over the ground projection.
/// https://stackoverflow.com/questions/1165647/how-to-determine-if-a-list-of-polygon-points-are-in-clockwise-order
pub fn is_clockwise(points: &[Point3D]) -> bool {
    let mut clockwise_sum = 0.;
    for (index, point) in points.iter().enumerate() {
        let next = points[(index + 1) % points.len()];
        clockwise_sum += (next.x - point.x) * (next.y + point.y);
    }
    clockwise_sum > 0.0
}
