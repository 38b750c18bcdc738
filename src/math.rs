use num_traits::real::Real;

use crate::Coords;

/// Converts an `f64` constant to the coordinate type.
pub(crate) fn real<C: Real>(value: f64) -> C {
    // Every floating point Real accepts an f64 cast
    C::from(value).unwrap_or_else(C::zero)
}

/// Checks whether segments `a0 -> a1` and `b0 -> b1` properly cross, returning the crossing point.
///
/// Segments sharing an endpoint, grazing segments, and segments too close to parallel (determinant below `epsilon`) do not cross.
pub(crate) fn segment_crossing<C: Real>(a0: Coords<C>, a1: Coords<C>, b0: Coords<C>, b1: Coords<C>, epsilon: C) -> Option<Coords<C>> {
    if a0 == b0 || a0 == b1 || a1 == b0 || a1 == b1 {
        return None;
    }
    let (x1, y1) = (a0.x(), a0.y());
    let (x2, y2) = (a1.x(), a1.y());
    let (x3, y3) = (b0.x(), b0.y());
    let (x4, y4) = (b1.x(), b1.y());

    // AABB early exit
    if x1.max(x2) < x3.min(x4) || x3.max(x4) < x1.min(x2) {
        return None;
    }
    if y1.max(y2) < y3.min(y4) || y3.max(y4) < y1.min(y2) {
        return None;
    }

    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denom.abs() < epsilon {
        return None;
    }
    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
    let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;

    let zero = C::zero();
    let one = C::one();
    if zero < ua && ua < one && zero < ub && ub < one {
        Some(Coords::new(x1 + ua * (x2 - x1), y1 + ua * (y2 - y1)))
    } else {
        None
    }
}

/// Given the sines and cosines of two turns relative to the same heading, is turn A "righter"
/// (a smaller angle on (-pi, pi]) than turn B?
///
/// Ties on the cosine favor A when turning clockwise and B otherwise; the edge tracer's walk depends on this exact ordering.
pub(crate) fn is_righter<C: Real>(sin_a: C, cos_a: C, sin_b: C, cos_b: C) -> bool {
    let zero = C::zero();
    if sin_a < zero {
        sin_b > zero || cos_a <= cos_b
    } else {
        !(sin_b < zero || cos_a <= cos_b)
    }
}

/// Index of the vertex before `i` in a closed loop of `len` vertices
#[inline]
pub(crate) fn prev_index(i: usize, len: usize) -> usize {
    if i == 0 { len - 1 } else { i - 1 }
}

/// Index of the vertex after `i` in a closed loop of `len` vertices
#[inline]
pub(crate) fn next_index(i: usize, len: usize) -> usize {
    if i + 1 == len { 0 } else { i + 1 }
}
