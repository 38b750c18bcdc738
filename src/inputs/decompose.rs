use crate::{Coords, Decomposition, DecompositionError, GeometryError, Polygon, PolygonBuilder, Settings, Vertex, builders::PolygonVecBuilder, decomposition::do_decompose, hull, trace};

/// `Decompose` provides the decomposition operations to slices of any [Vertex] type (and so to `Vec`s as well).
///
/// This trait is sealed and is not intended to be manually implemented.
pub trait Decompose: private::Sealed {
    /// The coordinate type of the vertices
    type Coordinate: crate::Real;

    /// Decomposes the polygon outlined by these vertices into convex polygons, which are fed to the `PolygonBuilder`.
    ///
    /// The outline may intersect itself. [Settings::preprocess] chooses how it is turned into a simple polygon first.
    fn decompose<PB: PolygonBuilder<Self::Coordinate>>(&self, settings: &Settings<Self::Coordinate>, initializer: PB::Initializer) -> Result<Decomposition<PB::Output>, DecompositionError<PB::Error>>;

    /// Decomposes into a `Vec` of [Polygon]s
    fn decompose_default(&self, settings: &Settings<Self::Coordinate>) -> Result<Decomposition<Vec<Polygon<Self::Coordinate>>>, GeometryError>;

    /// The convex hull of these vertices, taken as a point cloud. See [convex_hull](crate::convex_hull).
    fn convex_hull(&self, settings: &Settings<Self::Coordinate>) -> Result<Polygon<Self::Coordinate>, GeometryError>;

    /// The simple outline of this (possibly self-intersecting) vertex loop. See [trace_edges](crate::trace_edges).
    fn trace_edges(&self, settings: &Settings<Self::Coordinate>) -> Result<Polygon<Self::Coordinate>, GeometryError>;
}

impl<V: Vertex> Decompose for [V] {
    type Coordinate = V::Coordinate;

    #[inline]
    fn decompose<PB: PolygonBuilder<Self::Coordinate>>(&self, settings: &Settings<Self::Coordinate>, initializer: PB::Initializer) -> Result<Decomposition<PB::Output>, DecompositionError<PB::Error>> {
        do_decompose::<_, PB>(Polygon::from_vertices(self), settings, initializer)
    }

    fn decompose_default(&self, settings: &Settings<Self::Coordinate>) -> Result<Decomposition<Vec<Polygon<Self::Coordinate>>>, GeometryError> {
        self.decompose::<PolygonVecBuilder<_>>(settings, ()).map_err(|err| match err {
            DecompositionError::Geometry(err) => err,
            DecompositionError::PolygonBuilder(err) => match err { },
        })
    }

    fn convex_hull(&self, settings: &Settings<Self::Coordinate>) -> Result<Polygon<Self::Coordinate>, GeometryError> {
        let cloud: Vec<Coords<_>> = self.iter().map(Coords::from_vertex).collect();
        hull::convex_hull(&cloud, settings)
    }

    fn trace_edges(&self, settings: &Settings<Self::Coordinate>) -> Result<Polygon<Self::Coordinate>, GeometryError> {
        trace::trace_edges(&Polygon::from_vertices(self), settings)
    }
}

mod private {
    use crate::Vertex;

    pub trait Sealed { }

    impl<V: Vertex> Sealed for [V] { }
}
