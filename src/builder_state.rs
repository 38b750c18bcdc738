use std::{fmt, mem};

use num_traits::real::Real;

use crate::{DecompositionError, Polygon, PolygonBuilder, PolygonWinding};


pub(crate) enum PolygonBuilderState<C: Real, PB: PolygonBuilder<C>> {
    Uninitialized(PB::Initializer),
    Initialized(PB),
    Error(Option<PB>),
}

impl<C: Real, PB: PolygonBuilder<C>> PolygonBuilderState<C, PB> {
    pub(crate) fn new(initializer: PB::Initializer) -> Self {
        Self::Uninitialized(initializer)
    }

    /// Passes a counterclockwise polygon to the builder, creating the builder on the first call
    pub(crate) fn add_polygon(&mut self, polygon: &Polygon<C>) -> Result<(), DecompositionError<PB::Error>> {
        let reversed;
        let polygon = if PB::WINDING == PolygonWinding::Clockwise {
            let mut p = polygon.clone();
            p.reverse();
            reversed = p;
            &reversed
        } else {
            polygon
        };

        match mem::replace(self, Self::Error(None)) {
            Self::Initialized(mut pb) => {
                match pb.add_polygon(polygon).map_err(DecompositionError::from) {
                    Ok(()) => {
                        *self = Self::Initialized(pb);
                        Ok(())
                    }
                    Err(err) => {
                        *self = Self::Error(Some(pb));
                        Err(err)
                    }
                }
            }
            Self::Uninitialized(initializer) => {
                let pb = PB::new(initializer, polygon).map_err(DecompositionError::from)?;
                *self = Self::Initialized(pb);
                Ok(())
            }
            Self::Error(_) => Err(DecompositionError::internal("Polygon added after the builder failed")),
        }
    }

    pub(crate) fn complete(self, result: Result<(), DecompositionError<PB::Error>>) -> Result<PB::Output, DecompositionError<PB::Error>> {
        match (self, result) {
            // Success
            (Self::Initialized(pb), Ok(())) => pb.build().map_err(Into::into),
            // Failure, before PolygonBuilder initialized
            (Self::Uninitialized(_), result) => Err(result.err().unwrap_or_else(|| DecompositionError::internal("No polygons were produced"))),
            (Self::Error(None), Err(err)) => Err(err),
            // Failure, after PolygonBuilder initialized
            (Self::Initialized(pb), Err(err)) |
            (Self::Error(Some(pb)), Err(err)) => {
                pb.fail(&err);
                Err(err)
            }
            // Something went wrong (result should always be Err for Self::Error)
            (Self::Error(pb), Ok(())) => {
                debug_assert!(false);

                let err = DecompositionError::internal("Unknown error");
                if let Some(pb) = pb {
                    pb.fail(&err);
                }
                Err(err)
            }
        }
    }
}

impl<C: Real, PB: PolygonBuilder<C>> fmt::Debug for PolygonBuilderState<C, PB> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uninitialized(_) => "PolygonBuilderState::Uninitialized",
            Self::Initialized(_) => "PolygonBuilderState::Initialized",
            Self::Error(_) => "PolygonBuilderState::Error",
        })
    }
}
