//! Validates vertex computation for hexagons, rectangles and half-hexagons

use hexmosaic::geometry::{
    Point, SQRT_3, half_hexagon_corners, hexagon_corners, rectangle_corners,
};

const EPSILON: f64 = 1e-9;

#[test]
fn test_hexagon_corners_lie_on_circle() {
    let corners = hexagon_corners(Point::new(0.0, 0.0), 7.5);

    assert_eq!(corners.len(), 6);
    for corner in corners {
        let distance = corner.x.hypot(corner.y);
        assert!((distance - 7.5).abs() < EPSILON);
    }
}

#[test]
fn test_hexagon_is_flat_top() {
    let corners = hexagon_corners(Point::new(10.0, 20.0), 5.0);

    // First vertex sits at angle zero: the rightmost point on the center row
    let Some(first) = corners.first() else {
        unreachable!("hexagon always has six corners")
    };
    assert!((first.x - 15.0).abs() < EPSILON);
    assert!((first.y - 20.0).abs() < EPSILON);
}

#[test]
fn test_hexagon_is_closed_and_convex() {
    let corners = hexagon_corners(Point::new(3.0, -2.0), 7.5);
    let looped: Vec<Point> = corners.iter().chain(corners.iter().take(2)).copied().collect();

    let mut cross_products = Vec::new();
    for window in looped.windows(3) {
        let [a, b, c] = window else {
            unreachable!("windows(3) always yields three points")
        };
        let cross = (b.x - a.x).mul_add(c.y - b.y, -((b.y - a.y) * (c.x - b.x)));
        cross_products.push(cross);
    }

    // Consistent turn direction at every vertex means no self-intersection
    assert_eq!(cross_products.len(), 6);
    assert!(cross_products.iter().all(|&cross| cross > EPSILON));
}

#[test]
fn test_rectangle_corners_are_axis_aligned() {
    let corners = rectangle_corners(Point::new(10.0, 20.0), 4.0, 6.0);

    assert_eq!(
        corners,
        [
            Point::new(8.0, 17.0),
            Point::new(12.0, 17.0),
            Point::new(12.0, 23.0),
            Point::new(8.0, 23.0),
        ]
    );
}

#[test]
fn test_half_hexagon_corners() {
    let [left, apex, right] = half_hexagon_corners(Point::new(0.0, 0.0), 7.5);

    assert_eq!(left, Point::new(0.0, 0.0));
    assert!((apex.x - 7.5).abs() < EPSILON);
    assert!((apex.y - 7.5 * SQRT_3 / 2.0).abs() < EPSILON);
    assert!((apex.y - 6.495_190_528).abs() < 1e-6);
    assert_eq!(right, Point::new(15.0, 0.0));
}
