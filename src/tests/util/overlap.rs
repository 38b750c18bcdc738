use crate::{Coords, Polygon, Real};

/// Separating axis test for two convex polygons. Polygons which only touch within `tolerance` do not overlap.
pub fn convex_polygons_overlap<C: Real>(a: &Polygon<C>, b: &Polygon<C>, tolerance: C) -> bool {
    !(has_separating_edge(a, a, b, tolerance) || has_separating_edge(b, a, b, tolerance))
}

fn has_separating_edge<C: Real>(edges_of: &Polygon<C>, a: &Polygon<C>, b: &Polygon<C>, tolerance: C) -> bool {
    edges_of.edges().any(|(start, end)| {
        let edge = end - start;
        let axis = Coords::new(-edge.y(), edge.x()).normalized();
        let (a_min, a_max) = project(a, axis);
        let (b_min, b_max) = project(b, axis);
        a_max <= b_min + tolerance || b_max <= a_min + tolerance
    })
}

fn project<C: Real>(polygon: &Polygon<C>, axis: Coords<C>) -> (C, C) {
    polygon.vertices().iter().fold((C::max_value(), C::min_value()), |(min, max), &v| {
        let d = v.dot(axis);
        (min.min(d), max.max(d))
    })
}

pub fn total_area<C: Real>(polygons: &[Polygon<C>]) -> C {
    polygons.iter().fold(C::zero(), |acc, p| acc + p.area())
}
