use approx::assert_relative_eq;

use crate::{Coords, Decompose, ErrorKind, GeometryError, Polygon, Preprocess, Settings, convex_hull};

use super::util;

fn corners() -> Vec<[f64; 2]> {
    vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]]
}

#[test]
fn interior_points_excluded() {
    let cloud = vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.], [1., 1.], [2., 3.], [3., 2.]];
    let hull = cloud.convex_hull(&Settings::default()).expect("Hull failed");
    assert_eq!(hull, Polygon::from_vertices(&[[0., 4.], [4., 4.], [4., 0.], [0., 0.]]));
    assert_relative_eq!(hull.area(), -16.);
}

#[test]
fn random_interior_points_excluded() {
    for seed in 0..20 {
        let mut cloud = util::random_cloud(seed, 50, 0.1, 3.9);
        cloud.extend(corners());
        let hull = cloud.convex_hull(&Settings::default()).expect("Hull failed");
        assert_eq!(hull.len(), 4);
        let mut expected = Polygon::from_vertices(&corners());
        expected.reverse();
        assert!(hull.is_rotation_of(&expected), "{:?}", hull);
    }
}

#[test]
fn collinear_boundary_points_merged() {
    let cloud = vec![[1., 1.], [0., 0.], [2., 0.], [4., 0.], [2., 3.], [4., 4.], [0., 4.]];
    let hull = cloud.convex_hull(&Settings::default()).expect("Hull failed");
    assert_eq!(hull.len(), 4);
    assert!(!hull.vertices().contains(&Coords::new(2., 0.)));
}

#[test]
fn hull_of_random_cloud_is_convex() {
    for seed in 0..20 {
        let cloud = util::random_cloud(seed, 100, -10., 10.);
        let points: Vec<Coords<f64>> = cloud.iter().map(Coords::from_vertex).collect();
        let hull = convex_hull(&points, &Settings::default()).expect("Hull failed");
        assert!(hull.len() >= 3);
        assert!(hull.is_convex());
        assert!(!hull.is_ccw());
        assert!(hull.vertices().iter().all(|v| points.contains(v)));
    }
}

#[test]
fn not_enough_points() {
    let cloud = vec![[0., 0.], [1., 0.]];
    let err = cloud.convex_hull(&Settings::default()).unwrap_err();
    assert!(matches!(err, GeometryError::NotEnoughVertices(2)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn coincident_points_ignored() {
    // The start point appears twice
    let cloud = vec![[0., 0.], [2., 1.], [0., 0.], [1., 2.]];
    let hull = cloud.convex_hull(&Settings::default()).expect("Hull failed");
    assert_eq!(hull, Polygon::from_vertices(&[[1., 2.], [2., 1.], [0., 0.]]));
}

#[test]
fn doubled_cloud_has_the_same_hull() {
    let settings = Settings::default();
    for seed in 0..50 {
        let cloud = util::random_cloud(seed, 12, -10., 10.);
        let expected = cloud.convex_hull(&settings).expect("Hull failed");

        let appended: Vec<[f64; 2]> = cloud.iter().chain(cloud.iter()).cloned().collect();
        assert_eq!(appended.convex_hull(&settings).expect("Hull failed"), expected, "seed {}", seed);

        let interleaved: Vec<[f64; 2]> = cloud.iter().flat_map(|&p| vec![p, p]).collect();
        assert_eq!(interleaved.convex_hull(&settings).expect("Hull failed"), expected, "seed {}", seed);
    }
}

#[test]
fn too_few_distinct_points() {
    let cloud = vec![[1., 1.], [1., 1.], [2., 2.], [1., 1.]];
    let err = cloud.convex_hull(&Settings::default()).unwrap_err();
    assert!(matches!(err, GeometryError::DegenerateInput));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn collinear_cloud() {
    for cloud in &[
        vec![[0., 0.], [1., 0.], [2., 0.]],
        vec![[3., 1.], [0., 1.], [1., 1.], [2., 1.]],
        vec![[0., 0.], [1., 1.], [2., 2.], [3., 3.], [1., 1.]],
    ] {
        let err = cloud.convex_hull(&Settings::default()).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateInput), "{:?}", cloud);
    }
}

#[test]
fn decompose_cloud_with_duplicates() {
    let cloud = vec![[0., 0.], [2., 1.], [0., 0.], [1., 2.]];
    let decomposition = cloud.decompose_default(&Settings::with_preprocess(Preprocess::ConvexHull)).expect("Decomposition failed");
    assert_eq!(decomposition.partial, None);
    assert_eq!(decomposition.polygons.len(), 1);
    assert!(decomposition.polygons[0].is_ccw());
    assert_relative_eq!(decomposition.polygons[0].area(), 1.5);
}
