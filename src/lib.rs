mod idx;
mod math;
mod node;
mod builder_state;
mod inputs;
mod outputs;
mod errors;
mod settings;
mod polygon;
mod triangle;
mod merge;
mod validate;
mod hull;
mod trace;
mod pinch;
mod earclip;
mod polygonize;
mod decomposition;

#[cfg(feature = "debugging")]
pub mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{DecompositionError, ErrorKind, GeometryError, InternalError, UsabilityError};
pub use settings::{Preprocess, Settings};
pub use polygon::Polygon;
pub use triangle::Triangle;
pub use decomposition::{Decomposition, PartialResult};

pub use hull::convex_hull;
pub use trace::trace_edges;
pub use pinch::split_pinch_points;
pub use earclip::{Triangulation, triangulate};
pub use polygonize::polygonize;

pub use inputs::*;
pub use outputs::*;

pub use num_traits::real::Real;
