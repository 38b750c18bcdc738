use rand::{Rng, SeedableRng, rngs::StdRng};

/// `count` points scattered uniformly over the open box `(min, max)` on both axes
pub fn random_cloud(seed: u64, count: usize, min: f64, max: f64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| [rng.gen_range(min..max), rng.gen_range(min..max)])
        .collect()
}

/// A simple, star-shaped, counterclockwise polygon: `count` vertices at evenly spaced angles with random radii in `[r_min, r_max)`
pub fn random_radial_polygon(seed: u64, count: usize, r_min: f64, r_max: f64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let theta = std::f64::consts::PI * 2. * (i as f64) / (count as f64);
            let r = rng.gen_range(r_min..r_max);
            let (y, x) = theta.sin_cos();
            [x * r, y * r]
        })
        .collect()
}
