use approx::assert_relative_eq;

use crate::{Decompose, Polygon, Preprocess, Settings};

use super::util;

#[test]
fn resource_outlines() {
    let shapes = util::load_shapes(util::shapes_path().join("outlines.txt")).expect("Failed to load shapes");
    assert_eq!(shapes.len(), 5);
    for shape in &shapes {
        let decomposition = shape.decompose_default(&Settings::default()).expect("Decomposition failed");
        assert_eq!(decomposition.partial, None);
        let polygons = decomposition.polygons;
        for (i, a) in polygons.iter().enumerate() {
            assert!(a.is_convex() && a.is_ccw(), "{:?}", a);
            for b in &polygons[i + 1..] {
                assert!(!util::convex_polygons_overlap(a, b, 1e-9), "{:?} overlaps {:?}", a, b);
            }
        }
        assert_relative_eq!(util::total_area(&polygons), Polygon::from_vertices(shape).area().abs(), max_relative = 1e-9);
    }
}

#[test]
// A dangling edge poking out of a square is walked out and back, then cut off at the pinch point
fn spike() {
    let spike = vec![[0., 0.], [4., 0.], [4., 4.], [2., 4.], [2., 6.], [2., 4.], [0., 4.]];
    let expected = vec![Polygon::from_vertices(&[[4., 0.], [4., 4.], [0., 4.], [0., 0.]])];
    for &preprocess in &[Preprocess::Auto, Preprocess::TraceEdges] {
        let decomposition = spike.decompose_default(&Settings::with_preprocess(preprocess)).expect("Decomposition failed");
        assert_eq!(decomposition.polygons, expected, "{:?}", preprocess);
    }
}

#[test]
// Polygonizing used to stop after a fixed number of passes and leave convex shapes split
fn octagon_single_polygon() {
    let octagon = util::polygon::regular(8);
    let polygons = octagon.decompose_default(&Settings::default()).expect("Decomposition failed").polygons;
    assert_eq!(polygons.len(), 1);
    assert!(polygons[0].is_rotation_of(&Polygon::from_vertices(&octagon)));
    assert_eq!(polygons[0].validate(&Settings::default()), Ok(()));
}
