use approx::assert_relative_eq;

use crate::{Coords, Polygon, Triangle, math::{is_righter, segment_crossing}};

fn c(x: f64, y: f64) -> Coords<f64> {
    Coords::new(x, y)
}

#[test]
fn crossing_diagonals() {
    let crossing = segment_crossing(c(0., 0.), c(4., 4.), c(4., 0.), c(0., 4.), f64::EPSILON).expect("Diagonals should cross");
    assert_relative_eq!(crossing.x(), 2.);
    assert_relative_eq!(crossing.y(), 2.);
}

#[test]
fn shared_endpoint_is_not_a_crossing() {
    assert!(segment_crossing(c(0., 0.), c(4., 4.), c(4., 4.), c(0., 4.), f64::EPSILON).is_none());
}

#[test]
fn parallel_segments_do_not_cross() {
    assert!(segment_crossing(c(0., 0.), c(4., 0.), c(0., 1.), c(4., 1.), f64::EPSILON).is_none());
    // Collinear and overlapping
    assert!(segment_crossing(c(0., 0.), c(4., 0.), c(2., 0.), c(6., 0.), f64::EPSILON).is_none());
}

#[test]
fn touching_segments_do_not_cross() {
    // T junction: one endpoint lies on the other segment
    assert!(segment_crossing(c(0., 0.), c(4., 0.), c(2., 0.), c(2., 3.), f64::EPSILON).is_none());
    // Disjoint boxes
    assert!(segment_crossing(c(0., 0.), c(1., 1.), c(2., 0.), c(3., 1.), f64::EPSILON).is_none());
}

#[test]
fn righter_ordering() {
    // Straight ahead is righter than a left turn, a right turn is righter than straight ahead
    assert!(is_righter(0., 1., 1., 0.));
    assert!(is_righter(-1., 0., 0., 1.));
    assert!(!is_righter(1., 0., -1., 0.));
    // Sharper right turns are righter
    assert!(is_righter(-0.5, -0.8, -0.5, 0.8));
    // Of two left turns, the shallower one is righter
    assert!(is_righter(0.5, 0.8, 0.5, -0.8));
    assert!(!is_righter(0.5, -0.8, 0.5, 0.8));
}

#[test]
fn triangle_canonical_winding() {
    let ccw = Triangle::new(c(0., 0.), c(1., 0.), c(0., 1.));
    let cw = Triangle::new(c(0., 0.), c(0., 1.), c(1., 0.));
    assert_eq!(ccw, cw);
    assert_eq!(ccw.vertices(), &[c(0., 0.), c(1., 0.), c(0., 1.)]);
    assert_relative_eq!(cw.area(), 0.5);
}

#[test]
fn triangle_contains() {
    let t = Triangle::new(c(0., 0.), c(4., 0.), c(0., 4.));
    assert!(t.contains(c(1., 1.), 0.));
    // Edges and vertices are inside
    assert!(t.contains(c(2., 0.), 0.));
    assert!(t.contains(c(2., 2.), 0.));
    assert!(t.contains(c(0., 0.), 0.));
    assert!(!t.contains(c(3., 3.), 0.));
    assert!(!t.contains(c(-1., 1.), 0.));
}

#[test]
fn triangle_contains_within_tolerance() {
    let t = Triangle::new(c(0., 0.), c(4., 0.), c(0., 4.));
    // 0.001 below the bottom edge and 0.001 beyond the hypotenuse
    let below = c(2., -0.001);
    let beyond = c(2. + 0.001 / 2f64.sqrt(), 2. + 0.001 / 2f64.sqrt());
    assert!(!t.contains(below, 0.));
    assert!(!t.contains(beyond, 0.));
    assert!(t.contains(below, 0.002));
    assert!(t.contains(beyond, 0.002));
    assert!(!t.contains(c(2., -0.003), 0.002));
}

#[test]
fn degenerate_triangle() {
    let t = Triangle::new(c(0., 0.), c(1., 1.), c(0., 0.));
    assert!(t.is_degenerate());
    // Collapsed to the segment (0, 0) - (1, 1)
    assert!(t.contains(c(0.5, 0.5), 0.));
    assert!(!t.contains(c(0.5, 0.6), 0.));
    assert!(!Triangle::new(c(0., 0.), c(1., 0.), c(2., 0.)).is_degenerate());
}

#[test]
fn polygon_extent() {
    assert_eq!(Polygon::from_vertices(&[[-1., 0.], [3., 1.], [0., 2.]]).extent(), 4.);
    assert_eq!(Polygon::from_vertices(&[[0., -5.], [1., 0.], [0., 2.]]).extent(), 7.);
    assert_eq!(Polygon::<f64>::new(Vec::new()).extent(), 0.);
}

#[test]
fn polygon_area_and_winding() {
    let mut square = Polygon::from_vertices(&[[0., 0.], [2., 0.], [2., 2.], [0., 2.]]);
    assert_relative_eq!(square.area(), 4.);
    assert!(square.is_ccw());
    square.reverse();
    assert_relative_eq!(square.area(), -4.);
    assert!(!square.is_ccw());
    assert!(Polygon::<f64>::new(vec![c(0., 0.), c(1., 0.)]).area() == 0.);
}

#[test]
fn polygon_convexity() {
    let square = Polygon::from_vertices(&[[0., 0.], [2., 0.], [2., 2.], [0., 2.]]);
    assert!(square.is_convex());
    let concave = Polygon::from_vertices(&[[0., 0.], [2., 0.], [1., 0.5], [2., 2.], [0., 2.]]);
    assert!(!concave.is_convex());
    // Straight vertices are allowed
    let collinear = Polygon::from_vertices(&[[0., 0.], [1., 0.], [2., 0.], [2., 2.], [0., 2.]]);
    assert!(collinear.is_convex());
}

#[test]
fn polygon_simplicity() {
    let square = Polygon::from_vertices(&[[0., 0.], [2., 0.], [2., 2.], [0., 2.]]);
    assert!(square.is_simple(f64::EPSILON));
    let bowtie = Polygon::from_vertices(&[[0., 0.], [2., 2.], [2., 0.], [0., 2.]]);
    assert!(!bowtie.is_simple(f64::EPSILON));
}

#[test]
fn polygon_centroid() {
    let rectangle = Polygon::from_vertices(&[[1., 1.], [5., 1.], [5., 3.], [1., 3.]]);
    let centroid = rectangle.centroid();
    assert_relative_eq!(centroid.x(), 3., epsilon = 1e-12);
    assert_relative_eq!(centroid.y(), 2., epsilon = 1e-12);
}

#[test]
fn polygon_rotation() {
    let a = Polygon::from_vertices(&[[0., 0.], [1., 0.], [1., 1.]]);
    let b = Polygon::from_vertices(&[[1., 1.], [0., 0.], [1., 0.]]);
    let reversed = Polygon::from_vertices(&[[1., 1.], [1., 0.], [0., 0.]]);
    assert!(a.is_rotation_of(&b));
    assert!(!a.is_rotation_of(&reversed));
}
