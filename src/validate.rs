use num_traits::real::Real;

use crate::{Coords, Polygon, Settings, UsabilityError, math::{next_index, prev_index}};

impl<C: Real> Polygon<C> {
    /// Checks whether this polygon can be handed to a rigid-body engine as a convex collision shape.
    ///
    /// Performs the full set of checks (vertex count, convexity, simplicity, area, minimum angle, thickness, and core shape)
    /// and reports the first one that fails. Counterclockwise winding is required. Nothing in the decomposition
    /// pipeline calls this; run it on each output polygon before creating a shape from it.
    pub fn validate(&self, settings: &Settings<C>) -> Result<(), UsabilityError> {
        let len = self.len();
        if len < 3 {
            return Err(UsabilityError::TooFewVertices(len));
        }
        if len > settings.max_shape_vertices {
            return Err(UsabilityError::TooManyVertices(len));
        }
        if !self.is_convex() {
            return Err(UsabilityError::NotConvex);
        }
        if !self.is_simple(settings.epsilon) {
            return Err(UsabilityError::NotSimple);
        }
        if self.area() < settings.epsilon {
            return Err(UsabilityError::AreaTooSmall);
        }

        let vertices = self.vertices();
        // Outward normals of a counterclockwise polygon
        let normals: Vec<Coords<C>> = self.edges()
            .map(|(a, b)| {
                let edge = b - a;
                Coords::new(edge.y(), -edge.x()).normalized()
            })
            .collect();
        let centroid = self.centroid();

        for i in 0..len {
            let i_minus = prev_index(i, len);

            let cross = normals[i_minus].cross(normals[i]).max(-C::one()).min(C::one());
            if cross.asin() <= settings.angular_slop {
                return Err(UsabilityError::NearlyParallelEdges);
            }

            let i_plus = next_index(i, len);
            for (j, &v) in vertices.iter().enumerate() {
                if j == i || j == i_plus {
                    continue;
                }
                if normals[i].dot(v - vertices[i]) >= -settings.linear_slop {
                    return Err(UsabilityError::TooThin);
                }
            }

            // Shifting either edge at this vertex inward by the slop must not pass the centroid
            let v = vertices[i] - centroid;
            if normals[i_minus].dot(v) - settings.linear_slop < C::zero() || normals[i].dot(v) - settings.linear_slop < C::zero() {
                return Err(UsabilityError::CoreCrossesCentroid);
            }
        }
        Ok(())
    }
}
