use std::convert;

use num_traits::real::Real;

use crate::{DecompositionError, Polygon, PolygonBuilder};


/// Collects the polygons into a new `Vec<Polygon<C>>`
pub struct PolygonVecBuilder<C: Real> {
    polygons: Vec<Polygon<C>>,
}

impl<C: Real> PolygonBuilder<C> for PolygonVecBuilder<C> {
    type Initializer = ();
    type Output = Vec<Polygon<C>>;
    type Error = convert::Infallible;

    fn new(_initializer: Self::Initializer, polygon: &Polygon<C>) -> Result<Self, Self::Error> {
        Ok(Self {
            polygons: vec![polygon.clone()],
        })
    }

    fn add_polygon(&mut self, polygon: &Polygon<C>) -> Result<(), Self::Error> {
        self.polygons.push(polygon.clone());
        Ok(())
    }

    fn build(self) -> Result<Self::Output, Self::Error> {
        Ok(self.polygons)
    }

    fn fail(self, _error: &DecompositionError<Self::Error>) { }
}
