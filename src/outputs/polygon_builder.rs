use std::error;

use num_traits::real::Real;

use crate::{DecompositionError, Polygon, PolygonWinding};

/// Receives the convex polygons of a decomposition one at a time and assembles them into some output.
///
/// The builder is only created once the first polygon is available, so an [PolygonBuilder::Initializer] is
/// passed to the decomposition instead. If decomposition fails after the builder was created, [PolygonBuilder::fail]
/// is called instead of [PolygonBuilder::build].
pub trait PolygonBuilder<C: Real> {
    type Initializer;
    type Output;
    type Error: error::Error;

    /// The winding of the polygons passed to [PolygonBuilder::new] and [PolygonBuilder::add_polygon]
    const WINDING: PolygonWinding = PolygonWinding::Counterclockwise;

    fn new(initializer: Self::Initializer, polygon: &Polygon<C>) -> Result<Self, Self::Error>
    where Self: Sized;

    fn add_polygon(&mut self, polygon: &Polygon<C>) -> Result<(), Self::Error>;

    fn build(self) -> Result<Self::Output, Self::Error>;
    fn fail(self, error: &DecompositionError<Self::Error>);
}
