use num_traits::real::Real;

use crate::Coords;

/// A triangle whose vertices are always stored in counterclockwise order.
///
/// The winding is fixed once at construction from the sign of the cross product, so a degenerate (zero area)
/// triangle is stored with its last two vertices swapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<C: Real> {
    vertices: [Coords<C>; 3],
}

impl<C: Real> Triangle<C> {
    pub fn new(v0: Coords<C>, v1: Coords<C>, v2: Coords<C>) -> Self {
        let cross = (v1 - v0).cross(v2 - v0);
        let vertices = if cross > C::zero() {
            [v0, v1, v2]
        } else {
            [v0, v2, v1]
        };
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Coords<C>; 3] {
        &self.vertices
    }

    pub fn area(&self) -> C {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0) * crate::math::real(0.5)
    }

    /// Two of the vertices are bitwise identical
    pub fn is_degenerate(&self) -> bool {
        let [v0, v1, v2] = &self.vertices;
        v0.is_identical(v1) || v1.is_identical(v2) || v0.is_identical(v2)
    }

    /// Whether `p` lies inside the triangle or no further than `tolerance` outside one of its edges.
    ///
    /// The test is closed: with a zero `tolerance`, points on an edge or vertex are inside. A degenerate triangle
    /// holds the points of the segment it collapsed to.
    pub fn contains(&self, p: Coords<C>, tolerance: C) -> bool {
        let [v0, v1, v2] = self.vertices;
        if p.x() + tolerance < v0.x().min(v1.x()).min(v2.x()) || p.x() - tolerance > v0.x().max(v1.x()).max(v2.x()) {
            return false;
        }
        if p.y() + tolerance < v0.y().min(v1.y()).min(v2.y()) || p.y() - tolerance > v0.y().max(v1.y()).max(v2.y()) {
            return false;
        }

        // Counterclockwise winding puts the inside to the left of every edge
        [(v0, v1), (v1, v2), (v2, v0)].iter().all(|&(a, b)| {
            let edge = b - a;
            edge.cross(p - a) >= -tolerance * edge.length()
        })
    }
}
