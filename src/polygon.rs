use std::ops;

use num_traits::real::Real;

use crate::{Coords, Triangle, Vertex, math::{next_index, prev_index, real, segment_crossing}};

/// An ordered loop of points with an implicit closing edge from the last point to the first.
///
/// Every stage of the decomposition produces and consumes plain [Polygon]s; no stage keeps references into another's buffers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<C: Real> {
    vertices: Vec<Coords<C>>,
}

impl<C: Real> Polygon<C> {
    pub fn new(vertices: Vec<Coords<C>>) -> Self {
        Self { vertices }
    }

    /// Copies the coordinates of a slice of any [Vertex] type
    pub fn from_vertices<V: Vertex<Coordinate=C>>(vertices: &[V]) -> Self {
        Self::new(vertices.iter().map(Coords::from_vertex).collect())
    }

    pub fn vertices(&self) -> &[Coords<C>] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Coords<C>> {
        self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut Vec<Coords<C>> {
        &mut self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the edges as `(start, end)` pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item=(Coords<C>, Coords<C>)> + '_ {
        let len = self.vertices.len();
        (0..len).map(move |i| (self.vertices[i], self.vertices[next_index(i, len)]))
    }

    /// The cross product of the edges entering and leaving vertex `i`
    pub(crate) fn turn(&self, i: usize) -> C {
        let len = self.vertices.len();
        let lower = self.vertices[prev_index(i, len)];
        let middle = self.vertices[i];
        let upper = self.vertices[next_index(i, len)];
        (middle - lower).cross(upper - middle)
    }

    /// Signed area, positive for counterclockwise polygons
    pub fn area(&self) -> C {
        if self.vertices.len() < 3 {
            return C::zero();
        }
        let twice_area = self.edges().fold(C::zero(), |acc, (a, b)| acc + a.cross(b));
        twice_area * real(0.5)
    }

    /// The longer side of the axis aligned bounding box. Zero for an empty polygon.
    pub fn extent(&self) -> C {
        let first = match self.vertices.first() {
            Some(&first) => first,
            None => return C::zero(),
        };
        let (min, max) = self.vertices.iter().fold((first, first), |(min, max), v| (
            Coords::new(min.x().min(v.x()), min.y().min(v.y())),
            Coords::new(max.x().max(v.x()), max.y().max(v.y())),
        ));
        (max.x() - min.x()).max(max.y() - min.y())
    }

    pub fn is_ccw(&self) -> bool {
        self.area() > C::zero()
    }

    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// Whether the turn at every vertex has the same sign. Assumes the polygon is simple.
    ///
    /// A straight (zero) turn counts as positive.
    pub fn is_convex(&self) -> bool {
        let mut is_positive = None;
        for i in 0..self.vertices.len() {
            let positive = self.turn(i) >= C::zero();
            match is_positive {
                None => is_positive = Some(positive),
                Some(expected) if expected != positive => return false,
                Some(_) => { }
            }
        }
        true
    }

    /// Whether no two edges cross. Edges sharing an endpoint, touching, or nearly parallel are not counted as crossing.
    pub fn is_simple(&self, epsilon: C) -> bool {
        let len = self.vertices.len();
        for i in 0..len {
            let a0 = self.vertices[i];
            let a1 = self.vertices[next_index(i, len)];
            for j in i + 1..len {
                let b0 = self.vertices[j];
                let b1 = self.vertices[next_index(j, len)];
                if segment_crossing(a0, a1, b0, b1, epsilon).is_some() {
                    return false;
                }
            }
        }
        true
    }

    /// The area weighted centroid
    pub fn centroid(&self) -> Coords<C> {
        // Fan of triangles from the origin
        let third = real::<C>(1.0 / 3.0);
        let mut c = Coords::zero();
        let mut area = C::zero();
        for (p2, p3) in self.edges() {
            let triangle_area = p2.cross(p3) * real(0.5);
            area = area + triangle_area;
            c = c + (p2 + p3) * (triangle_area * third);
        }
        c * area.recip()
    }

    /// Whether `other` holds bitwise identical vertices in the same cyclic order, starting from any vertex
    pub fn is_rotation_of(&self, other: &Polygon<C>) -> bool {
        let len = self.vertices.len();
        if len != other.vertices.len() {
            return false;
        }
        if len == 0 {
            return true;
        }
        (0..len).any(|offset| {
            (0..len).all(|i| self.vertices[(i + offset) % len].is_identical(&other.vertices[i]))
        })
    }
}

impl<C: Real> From<Triangle<C>> for Polygon<C> {
    fn from(triangle: Triangle<C>) -> Self {
        Self::new(triangle.vertices().to_vec())
    }
}

impl<C: Real> ops::Index<usize> for Polygon<C> {
    type Output = Coords<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vertices[index]
    }
}
