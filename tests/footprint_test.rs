use cj_tb::{Point3D, is_clockwise, order_by_bearing};

fn p(x: f64, y: f64) -> Point3D {
    Point3D::new(x, y, 0.)
}

/// Cross products of consecutive edge vectors must all have the same sign
/// for a convex quad in one rotational direction.
fn single_rotational_direction(points: &[Point3D]) -> bool {
    let n = points.len();
    let mut sign = 0.0_f64;
    for i in 0..n {
        let a = points[(i + 1) % n] - points[i];
        let b = points[(i + 2) % n] - points[(i + 1) % n];
        let cross = a.x * b.y - a.y * b.x;
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Scrambled unit square corners come back clockwise from north.
#[test]
fn unit_square_scrambled() {
    let scrambled = [p(1., 1.), p(0., 0.), p(1., 0.), p(0., 1.)];
    let ordered = order_by_bearing(&scrambled);
    assert_eq!(ordered, vec![p(0., 1.), p(1., 1.), p(1., 0.), p(0., 0.)]);
    assert!(single_rotational_direction(&ordered));
    assert!(is_clockwise(&ordered));
}

/// The point closest to due west sorts first, then north, east, south.
#[test]
fn compass_points() {
    let scrambled = [p(0., 1.), p(1., 0.), p(0., -1.), p(-1., 0.)];
    let ordered = order_by_bearing(&scrambled);
    assert_eq!(
        ordered,
        vec![p(-1., 0.), p(0., 1.), p(1., 0.), p(0., -1.)]
    );
}

/// A footprint whose angular span straddles the 0/360 bearing seam still
/// comes back in one rotational direction.
#[test]
fn straddles_north_seam() {
    // a thin quad pointing north from its centroid
    let scrambled = [p(-0.1, 1.), p(0.1, 1.), p(0.3, 3.), p(-0.3, 3.)];
    let ordered = order_by_bearing(&scrambled);
    assert!(single_rotational_direction(&ordered));
}

/// Any permutation of a convex quad orders into one rotational direction.
#[test]
fn all_permutations_consistent() {
    let corners = [p(2., 0.), p(10., 1.), p(9., 5.), p(1., 4.)];
    for a in 0..4 {
        for b in 0..4 {
            if b == a {
                continue;
            }
            for c in 0..4 {
                if c == a || c == b {
                    continue;
                }
                let d = 6 - a - b - c;
                let scrambled = [corners[a], corners[b], corners[c], corners[d]];
                let ordered = order_by_bearing(&scrambled);
                assert!(
                    single_rotational_direction(&ordered),
                    "twisted for permutation {a}{b}{c}{d}"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Degenerate input
// ---------------------------------------------------------------------------

/// Fewer than 2 points are returned unchanged.
#[test]
fn degenerate_input_unchanged() {
    assert_eq!(order_by_bearing(&[]), Vec::<Point3D>::new());
    let single = [p(3., 4.)];
    assert_eq!(order_by_bearing(&single), vec![p(3., 4.)]);
}

/// Coincident points tie on the sort key and keep their relative order.
#[test]
fn ties_are_stable() {
    let twin_a = Point3D::new(1., 1., 0.);
    let twin_b = Point3D::new(1., 1., 7.); // same ground position, marked by z
    let points = [twin_a, twin_b];
    let ordered = order_by_bearing(&points);
    assert_eq!(ordered[0].z, 0.);
    assert_eq!(ordered[1].z, 7.);
}
