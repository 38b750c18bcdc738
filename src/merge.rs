use num_traits::real::Real;

use crate::{Polygon, math::{next_index, prev_index}};

impl<C: Real> Polygon<C> {
    /// Collapses runs of bitwise identical adjacent vertices, including the pair wrapping from last to first.
    ///
    /// Returns the number of vertices removed.
    pub fn remove_duplicate_vertices(&mut self) -> usize {
        let vertices = self.vertices_mut();
        let before = vertices.len();
        vertices.dedup_by(|b, a| a.is_identical(b));
        while vertices.len() > 1 && vertices[0].is_identical(&vertices[vertices.len() - 1]) {
            vertices.pop();
        }
        before - vertices.len()
    }

    /// Removes vertices whose adjacent edges are nearly collinear (the cross product of the normalized edge directions
    /// is below `tolerance` while both point the same way), or where an adjacent edge has zero length.
    ///
    /// Vertices are removed one at a time, re-examining the remaining loop after each removal, until nothing
    /// changes or only 3 vertices remain. Triangles are never reduced further.
    ///
    /// Returns the number of vertices removed.
    pub fn merge_parallel_edges(&mut self, tolerance: C) -> usize {
        self.merge_vertices_where(tolerance, None)
    }

    /// Like [Polygon::merge_parallel_edges], but only removes a vertex if it lies within `max_offset` of the line through
    /// its neighbors. This bounds the area every removal gives up.
    pub fn merge_parallel_edges_within(&mut self, tolerance: C, max_offset: C) -> usize {
        self.merge_vertices_where(tolerance, Some(max_offset))
    }

    fn merge_vertices_where(&mut self, tolerance: C, max_offset: Option<C>) -> usize {
        let mut removed = 0;
        while self.len() > 3 {
            match self.find_mergeable_vertex(tolerance, max_offset) {
                Some(i) => {
                    log::trace!("Merging vertex {} at {}", i, self[i]);
                    self.vertices_mut().remove(i);
                    removed += 1;
                }
                None => break,
            }
        }
        removed
    }

    fn find_mergeable_vertex(&self, tolerance: C, max_offset: Option<C>) -> Option<usize> {
        let vertices = self.vertices();
        let len = vertices.len();
        (0..len).find(|&i| {
            let lower = vertices[prev_index(i, len)];
            let middle = vertices[i];
            let upper = vertices[next_index(i, len)];
            let d0 = middle - lower;
            let d1 = upper - middle;
            let norm0 = d0.length();
            let norm1 = d1.length();
            if !(norm0 > C::zero() && norm1 > C::zero()) {
                return true;
            }
            let d0 = d0 * norm0.recip();
            let d1 = d1 * norm1.recip();
            if !(d0.cross(d1).abs() < tolerance && d0.dot(d1) > C::zero()) {
                return false;
            }
            match max_offset {
                Some(max_offset) => {
                    let chord = upper - lower;
                    chord.cross(middle - lower).abs() <= max_offset * chord.length()
                }
                None => true,
            }
        })
    }
}
