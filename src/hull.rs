use num_traits::real::Real;

use crate::{Coords, GeometryError, Polygon, Settings};

/// Wraps a point cloud in its convex hull.
///
/// Gift wrapping that starts from the first point with minimal `y` and repeatedly steps to the point whose
/// direction has the largest dot product with the previous step's direction, which stands in for the smallest
/// turn without any inverse trigonometry. Nearly parallel hull edges are merged afterwards using
/// [Settings::angular_slop], so the result only keeps corners that actually turn.
///
/// Points within [Settings::collapse_distance_squared] of an earlier point are ignored. Fewer than 3 distinct
/// points, or distinct points on a single line, are [GeometryError::DegenerateInput].
///
/// The hull winds clockwise.
pub fn convex_hull<C: Real>(cloud: &[Coords<C>], settings: &Settings<C>) -> Result<Polygon<C>, GeometryError> {
    if cloud.len() < 3 {
        return Err(GeometryError::NotEnoughVertices(cloud.len()));
    }

    // A point coincident with the current one has no direction to step in
    let mut points: Vec<Coords<C>> = Vec::with_capacity(cloud.len());
    for &p in cloud {
        if !points.iter().any(|&q| (q - p).length_squared() <= settings.collapse_distance_squared) {
            points.push(p);
        }
    }
    let n = points.len();
    if n < 3 {
        log::debug!("Convex hull input has only {} distinct points", n);
        return Err(GeometryError::DegenerateInput);
    }

    let mut min_y = C::max_value();
    let mut min_y_index = 0;
    for (i, p) in points.iter().enumerate() {
        if p.y() < min_y {
            min_y = p.y();
            min_y_index = i;
        }
    }

    let mut hull = Vec::new();
    let mut current = min_y_index;
    let mut dir = Coords::new(-C::one(), C::zero());
    loop {
        let mut max_dot = -C::one() - C::one();
        let mut winner = None;
        for (i, p) in points.iter().enumerate() {
            if i == current {
                continue;
            }
            let new_dir = (*p - points[current]).normalized();
            let dot = new_dir.dot(dir);
            if dot > max_dot {
                max_dot = dot;
                winner = Some(i);
            }
        }
        let winner = winner.ok_or_else(|| GeometryError::inconsistency("Convex hull found no candidate point"))?;

        hull.push(points[winner]);
        dir = (points[winner] - points[current]).normalized();
        current = winner;
        if winner == min_y_index {
            break;
        }
        if hull.len() > n {
            return Err(GeometryError::inconsistency(format!("Convex hull walk did not close after {} steps", hull.len())));
        }
    }

    let mut polygon = Polygon::new(hull);
    let merged = polygon.merge_parallel_edges(settings.angular_slop);
    let extent = polygon.extent();
    if polygon.area().abs() <= settings.epsilon * extent * extent {
        log::debug!("Convex hull of {} points is flat", n);
        return Err(GeometryError::DegenerateInput);
    }
    log::debug!("Convex hull of {} points has {} vertices ({} merged)", cloud.len(), polygon.len(), merged);
    Ok(polygon)
}
