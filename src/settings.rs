use num_traits::real::Real;

use crate::math::real;

/// Selects how the input vertices become a simple polygon before triangulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preprocess {
    /// Resolve self-intersections with the edge tracer, but only if the input actually has any.
    /// Simple input is used exactly as given.
    Auto,
    /// Always rebuild the outline with the edge tracer
    TraceEdges,
    /// Treat the input as a point cloud and decompose its convex hull
    ConvexHull,
}

impl Default for Preprocess {
    fn default() -> Self {
        Preprocess::Auto
    }
}

/// Tolerances and limits for every decomposition stage.
///
/// The defaults match the constraints of a typical rigid-body engine working in meters.
#[derive(Debug, Clone, Copy)]
pub struct Settings<C: Real> {
    /// Vertex cap for polygons produced by merging triangles
    pub max_polygon_vertices: usize,
    /// Upper vertex bound accepted by [Polygon::validate](crate::Polygon::validate)
    pub max_shape_vertices: usize,
    /// Smallest determinant, length or area treated as non-zero. Decomposition output is filtered on this times the
    /// squared extent of the outline instead.
    pub epsilon: C,
    /// Edge tracer nodes closer than this (squared) are merged, and convex hull points this close count once
    pub collapse_distance_squared: C,
    /// Per-axis distance under which two non-adjacent vertices form a pinch point
    pub pinch_tolerance: C,
    /// Angular tolerance, in radians, for merging hull edges and for the parallel edge check
    pub angular_slop: C,
    /// Angular tolerance, in radians, for merging collinear edges of merged polygons
    pub collinear_tolerance: C,
    /// Collision skin thickness used by the thin polygon and core shape checks. Also the furthest a vertex may sit
    /// off its neighbors' chord and still be merged away by the polygonizer.
    pub linear_slop: C,
    /// Maximum number of neighbors of a single edge tracer node
    pub max_connections: usize,
    pub preprocess: Preprocess,
}

impl<C: Real> Default for Settings<C> {
    fn default() -> Self {
        let epsilon = C::epsilon();
        Self {
            max_polygon_vertices: 32,
            max_shape_vertices: 8,
            epsilon,
            collapse_distance_squared: epsilon * epsilon,
            pinch_tolerance: real(0.001),
            angular_slop: real::<C>(2.0).to_radians(),
            collinear_tolerance: real::<C>(1.0).to_radians(),
            linear_slop: real(0.005),
            max_connections: 32,
            preprocess: Preprocess::Auto,
        }
    }
}

impl<C: Real> Settings<C> {
    /// Default settings using the given [Preprocess] mode
    pub fn with_preprocess(preprocess: Preprocess) -> Self {
        Self {
            preprocess,
            ..Self::default()
        }
    }
}
