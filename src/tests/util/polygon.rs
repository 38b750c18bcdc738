use super::vtest::VTest;

/// Counterclockwise unit square
pub fn square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (1.0, 1.0).into(),
        (0.0, 1.0).into(),
    ]
}

/// A 4x4 square with an extra vertex halfway along the bottom edge
pub fn collinear_square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (2.0, 0.0).into(),
        (4.0, 0.0).into(),
        (4.0, 4.0).into(),
        (0.0, 4.0).into(),
    ]
}

pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (-2.0, 2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (2.0, -2.0).into(),
    ]
}

pub fn half_frame() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (0.05, 0.05).into(), (0.95, 0.05).into(), (0.95, 0.95).into(), (1., 1.).into(), (1., 0.).into()
    ]
}

/// Two triangles meeting at a single shared vertex
pub fn hourglass() -> Vec<VTest> {
    // ___
    // \ /
    //  x
    // / \
    // ---
    vec![(-1., 1.).into(), (1., 1.).into(), (0., 0.).into(), (1., -1.).into(), (-1., -1.).into(), (0., 0.).into()]
}

/// Self-intersecting: edges (0,0)-(4,4) and (4,0)-(0,4) cross at (2,2)
pub fn figure_eight() -> Vec<VTest> {
    vec![(0., 0.).into(), (4., 4.).into(), (4., 0.).into(), (0., 4.).into()]
}

/// Every second vertex of a regular pentagon, so each edge crosses two others
pub fn pentagram() -> Vec<[f64; 2]> {
    (0..5)
        .map(|i| {
            let theta = std::f64::consts::FRAC_PI_2 + std::f64::consts::PI * 4. * (i as f64) / 5.;
            let (y, x) = theta.sin_cos();
            [x, y]
        })
        .collect()
}

/// Counterclockwise regular polygon of radius 100, starting at (100, 0)
pub fn regular(n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
            let (y, x) = theta.sin_cos();
            [x * 100., y * 100.]
        })
        .collect()
}

/// Simple polygons without pinch points or near-collinear vertices
pub fn all() -> Vec<Vec<VTest>> {
    vec![square(), collinear_square(), star(), half_frame()]
}
