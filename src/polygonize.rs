use num_traits::real::Real;

use crate::{Polygon, Settings, Triangle, math::next_index};

impl<C: Real> Polygon<C> {
    /// Grows the polygon by a triangle sharing one of its edges, returning the enlarged polygon.
    ///
    /// The shared edge must match two bitwise identical, adjacent vertices of the polygon (the closing edge
    /// included). The triangle's third vertex is inserted between them. Returns [None] if no such edge exists.
    pub(crate) fn with_triangle(&self, triangle: &Triangle<C>) -> Option<Polygon<C>> {
        let vertices = self.vertices();
        let len = vertices.len();
        let t = triangle.vertices();

        let mut first: Option<(usize, usize)> = None;
        let mut second: Option<(usize, usize)> = None;
        for (i, v) in vertices.iter().enumerate() {
            let matched = (0..3).find(|&k| t[k].is_identical(v));
            if let Some(k) = matched {
                if first.is_none() {
                    first = Some((i, k));
                } else {
                    second = Some((i, k));
                }
            }
        }

        let (mut first, mut second) = match (first, second) {
            (Some(first), Some(second)) => (first, second),
            _ => return None,
        };
        // The closing edge runs from the last vertex to the first
        if first.0 == 0 && second.0 == len - 1 {
            std::mem::swap(&mut first, &mut second);
        }
        if second.0 != next_index(first.0, len) || first.1 == second.1 {
            return None;
        }

        let tip = 3 - first.1 - second.1;
        let mut grown = Vec::with_capacity(len + 1);
        grown.extend_from_slice(&vertices[..=first.0]);
        grown.push(t[tip]);
        grown.extend_from_slice(&vertices[first.0 + 1..]);
        Some(Polygon::new(grown))
    }
}

/// Greedily merges triangles sharing edges into convex polygons of at most [Settings::max_polygon_vertices] vertices.
///
/// The first triangle not yet covered seeds a polygon. The remaining triangles are then offered to it in order,
/// cycling around from the seed until a full pass absorbs nothing. A triangle is absorbed if the result stays
/// convex and under the vertex cap. This repeats until every triangle is covered. Triangles with bitwise identical vertices are never used.
/// Finished polygons have their nearly collinear vertices merged with [Settings::collinear_tolerance], as long as
/// each merged vertex lies within [Settings::linear_slop] of its neighbors' chord.
///
/// Output polygons wind counterclockwise. The result depends on the order of `triangles`.
pub fn polygonize<C: Real>(triangles: &[Triangle<C>], settings: &Settings<C>) -> Vec<Polygon<C>> {
    let n = triangles.len();
    let mut covered: Vec<bool> = triangles.iter().map(Triangle::is_degenerate).collect();
    let mut polygons = Vec::new();

    while let Some(seed) = covered.iter().position(|&c| !c) {
        covered[seed] = true;
        let mut polygon = Polygon::from(triangles[seed]);
        let mut grew = true;
        while grew {
            grew = false;
            for offset in 1..=n {
                let index = (seed + offset) % n;
                if covered[index] {
                    continue;
                }
                let grown = match polygon.with_triangle(&triangles[index]) {
                    Some(grown) => grown,
                    None => continue,
                };
                if grown.len() <= settings.max_polygon_vertices && grown.is_convex() {
                    polygon = grown;
                    covered[index] = true;
                    grew = true;
                }
            }
        }

        polygon.merge_parallel_edges_within(settings.collinear_tolerance, settings.linear_slop);
        if polygon.len() >= 3 {
            polygons.push(polygon);
        } else {
            log::trace!("Dropping polygon merged down to {} vertices", polygon.len());
        }
    }

    log::debug!("Merged {} triangles into {} convex polygons", n, polygons.len());
    polygons
}
