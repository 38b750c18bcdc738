use std::convert;

use crate::{DecompositionError, Polygon, PolygonBuilder, VertexNew};


/// Appends each polygon to a caller's `Vec<Vec<V>>` as its own list of vertices.
///
/// [PolygonBuilder::build] returns the newly appended polygons. On failure the `Vec` is truncated back to its original length.
pub struct VecVecPolygonBuilder<'f, V: VertexNew> {
    polygons: &'f mut Vec<Vec<V>>,
    initial_polygon_count: usize,
}

impl<'f, V: VertexNew> PolygonBuilder<V::Coordinate> for VecVecPolygonBuilder<'f, V> {
    type Initializer = &'f mut Vec<Vec<V>>;
    type Output = &'f mut [Vec<V>];
    type Error = convert::Infallible;

    fn new(polygons: Self::Initializer, polygon: &Polygon<V::Coordinate>) -> Result<Self, Self::Error> {
        let initial_polygon_count = polygons.len();
        let mut pb = Self {
            polygons,
            initial_polygon_count,
        };
        pb.add_polygon(polygon)?;
        Ok(pb)
    }

    fn add_polygon(&mut self, polygon: &Polygon<V::Coordinate>) -> Result<(), Self::Error> {
        self.polygons.push(polygon.vertices().iter().map(|c| c.to_vertex()).collect());
        Ok(())
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(&mut self.polygons[self.initial_polygon_count..])
    }

    fn fail(self, _error: &DecompositionError<Self::Error>) {
        self.polygons.truncate(self.initial_polygon_count);
    }
}

