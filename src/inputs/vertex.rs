use core::fmt;
use std::{fmt::Debug, ops};

use num_traits::real::Real;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// A [Vertex] which can be constructed from its coordinates.
///
/// Required of output vertex types, since resolving self-intersections creates points which were not part of the input.
pub trait VertexNew: Vertex {
    /// Creates a vertex at (`x`, `y`)
    fn new(x: Self::Coordinate, y: Self::Coordinate) -> Self;
}

/// The point type used internally by every decomposition stage.
#[derive(Clone, Copy, PartialEq)]
pub struct Coords<C: Real>([C; 2]);

impl<C: Real> Coords<C> {
    #[inline(always)]
    pub fn new(x: C, y: C) -> Self { Self([x, y]) }

    #[inline(always)]
    pub fn x(&self) -> C { self.0[0] }
    #[inline(always)]
    pub fn y(&self) -> C { self.0[1] }

    pub fn zero() -> Self { Self([C::zero(), C::zero()]) }

    /// Copies the coordinates of any [Vertex] with the same coordinate type
    pub fn from_vertex<V: Vertex<Coordinate=C>>(v: &V) -> Self {
        Self([v.x(), v.y()])
    }

    /// Converts to any [VertexNew] type with the same coordinate type
    pub fn to_vertex<V: VertexNew<Coordinate=C>>(self) -> V {
        V::new(self.x(), self.y())
    }

    pub fn dot(self, other: Self) -> C {
        self.x() * other.x() + self.y() * other.y()
    }

    /// The z component of the 3D cross product of `self` and `other`
    pub fn cross(self, other: Self) -> C {
        self.x() * other.y() - self.y() * other.x()
    }

    pub fn length_squared(self) -> C {
        self.dot(self)
    }

    pub fn length(self) -> C {
        self.length_squared().sqrt()
    }

    /// Scales to unit length. The zero vector is returned unchanged.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > C::zero() {
            self * length.recip()
        } else {
            self
        }
    }

    /// Bitwise coordinate equality, as used for shared triangle edges
    #[inline(always)]
    pub fn is_identical(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

impl<C: Real> ops::Add for Coords<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self([self.x() + rhs.x(), self.y() + rhs.y()])
    }
}

impl<C: Real> ops::Sub for Coords<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self([self.x() - rhs.x(), self.y() - rhs.y()])
    }
}

impl<C: Real> ops::Mul<C> for Coords<C> {
    type Output = Self;

    fn mul(self, rhs: C) -> Self::Output {
        Self([self.x() * rhs, self.y() * rhs])
    }
}

impl<C: Real> fmt::Debug for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Coords");
        if let Some(x) = self.x().to_f64() {
            tuple.field(&x);
        }
        if let Some(y) = self.y().to_f64() {
            tuple.field(&y);
        }
        tuple.finish()
    }
}

impl<C: Real> fmt::Display for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(x), Some(y)) = (self.x().to_f64(), self.y().to_f64()) {
            write!(f, "({}, {})", x, y)
        } else {
            write!(f, "Coords<{}>", std::any::type_name::<C>())
        }
    }
}

impl<C: Real> Vertex for Coords<C> {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.0[1]
    }
}

impl<C: Real> VertexNew for Coords<C> {
    #[inline(always)]
    fn new(x: C, y: C) -> Self {
        Self([x, y])
    }
}

impl<C: Real> From<[C; 2]> for Coords<C> {
    fn from(c: [C; 2]) -> Self {
        Self(c)
    }
}

impl<C: Real> From<(C, C)> for Coords<C> {
    fn from((x, y): (C, C)) -> Self {
        Self([x, y])
    }
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> VertexNew for [C; 2] {
    #[inline(always)]
    fn new(x: C, y: C) -> Self {
        [x, y]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

impl<C: Debug + Real> VertexNew for (C, C) {
    #[inline(always)]
    fn new(x: C, y: C) -> Self {
        (x, y)
    }
}
