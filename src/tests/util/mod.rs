pub mod polygon;
mod load_shapes;
mod cloud;
mod vtest;
mod overlap;
use std::{env, path};

pub use vtest::VTest;
pub use load_shapes::load_shapes;
pub use cloud::{random_cloud, random_radial_polygon};
pub use overlap::{convex_polygons_overlap, total_area};

pub fn shapes_path() -> path::PathBuf {
    path::Path::new(env!("CARGO_MANIFEST_DIR")).join("resources").join("shapes")
}
