use num_traits::real::Real;

use crate::{Coords, GeometryError, Polygon, Triangle, math::{next_index, prev_index, real, segment_crossing}};

/// The triangles of one polygon piece
#[derive(Debug, Clone)]
pub struct Triangulation<C: Real> {
    pub triangles: Vec<Triangle<C>>,
    /// `false` if ear clipping ran out of ears before the polygon was used up. [Triangulation::triangles] then covers only part of the polygon.
    pub complete: bool,
}

/// Triangulates a simple polygon without pinch points by ear clipping.
///
/// Of all ears available at each step, the one whose thinnest corner is widest is clipped, which keeps slivers
/// out of the result. An `n` vertex polygon yields `n - 2` triangles. If at some point no ear is left the
/// triangles clipped so far are returned as an incomplete [Triangulation]; finding no ear at all is an error.
/// The winding of the input does not matter.
///
/// Vertices within `sqrt(epsilon)` times the polygon's [extent](Polygon::extent) of an ear block it, so a vertex
/// sitting on the clip diagonal up to rounding never ends up outside the remaining loop.
pub fn triangulate<C: Real>(polygon: &Polygon<C>) -> Result<Triangulation<C>, GeometryError> {
    let len = polygon.len();
    if len < 3 {
        return Err(GeometryError::NotEnoughVertices(len));
    }

    let mut vertices = polygon.vertices().to_vec();
    // Clipping works on clockwise loops
    if polygon.area() > C::zero() {
        vertices.reverse();
    }

    let tolerance = C::epsilon().sqrt() * polygon.extent();
    let mut triangles = Vec::with_capacity(len - 2);
    while vertices.len() > 3 {
        let ear = match best_ear(&vertices, tolerance) {
            Some(ear) => ear,
            None if triangles.is_empty() => {
                return Err(GeometryError::inconsistency(format!("No ear found in {} vertex polygon", vertices.len())));
            }
            None => {
                log::warn!("Ear clipping stopped with {} of {} vertices left", vertices.len(), len);
                return Ok(Triangulation { triangles, complete: false });
            }
        };

        let n = vertices.len();
        let lower = vertices[prev_index(ear, n)];
        let upper = vertices[next_index(ear, n)];
        triangles.push(Triangle::new(vertices[ear], upper, lower));
        vertices.remove(ear);
    }
    triangles.push(Triangle::new(vertices[1], vertices[2], vertices[0]));

    log::trace!("Clipped {} triangles from {} vertex polygon", triangles.len(), len);
    Ok(Triangulation { triangles, complete: true })
}

fn best_ear<C: Real>(vertices: &[Coords<C>], tolerance: C) -> Option<usize> {
    let mut best = None;
    let mut best_quality = real::<C>(-10.0);
    for i in 0..vertices.len() {
        if !is_ear(vertices, i, tolerance) {
            continue;
        }
        let quality = ear_quality(vertices, i);
        if quality > best_quality {
            best_quality = quality;
            best = Some(i);
        }
    }
    best
}

/// Vertex `i` of a clockwise loop is an ear if it does not turn left, no other vertex lies within `tolerance` of its
/// triangle, and the diagonal left behind crosses no edge.
fn is_ear<C: Real>(vertices: &[Coords<C>], i: usize, tolerance: C) -> bool {
    let n = vertices.len();
    let lower = vertices[prev_index(i, n)];
    let middle = vertices[i];
    let upper = vertices[next_index(i, n)];
    if (middle - lower).cross(upper - middle) > C::zero() {
        return false;
    }

    let triangle = Triangle::new(middle, upper, lower);
    let corners = [lower, middle, upper];
    // Other copies of a corner touch the triangle without blocking it
    let blocked = vertices.iter()
        .filter(|v| !corners.iter().any(|corner| corner.is_identical(v)))
        .any(|&v| triangle.contains(v, tolerance));
    if blocked {
        return false;
    }

    !(0..n).any(|j| segment_crossing(lower, upper, vertices[j], vertices[next_index(j, n)], C::epsilon()).is_some())
}

/// The smallest cross product of the ear's normalized edge directions
fn ear_quality<C: Real>(vertices: &[Coords<C>], i: usize) -> C {
    let n = vertices.len();
    let lower = vertices[prev_index(i, n)];
    let middle = vertices[i];
    let upper = vertices[next_index(i, n)];
    let d1 = (upper - middle).normalized();
    let d2 = (middle - lower).normalized();
    let d3 = (lower - upper).normalized();
    d1.cross(d2).abs()
        .min(d2.cross(d3).abs())
        .min(d3.cross(d1).abs())
}
