use num_traits::real::Real;

use crate::{Polygon, Settings};

/// Splits a polygon at every pinch point, a pair of non-adjacent vertices closer than
/// [Settings::pinch_tolerance] on both axes, into pieces that no longer touch themselves.
///
/// The piece running from the first pinched vertex up to the second is processed first; the rest of the loop
/// follows. Pieces with fewer than 3 vertices are dropped. A polygon without pinch points is returned as is.
pub fn split_pinch_points<C: Real>(polygon: &Polygon<C>, settings: &Settings<C>) -> Vec<Polygon<C>> {
    let mut pieces = Vec::new();
    let mut stack = vec![polygon.clone()];
    while let Some(piece) = stack.pop() {
        match find_pinch_split(&piece, settings.pinch_tolerance) {
            Some((i, j)) => {
                log::trace!("Splitting {} vertex polygon at pinch point {} / {}", piece.len(), i, j);
                let (a, b) = split_at(&piece, i, j);
                // Popped in reverse order
                stack.push(b);
                stack.push(a);
            }
            None if piece.len() >= 3 => pieces.push(piece),
            None => log::trace!("Dropping {} vertex piece", piece.len()),
        }
    }
    if pieces.len() > 1 {
        log::debug!("Split {} vertex polygon into {} pieces at pinch points", polygon.len(), pieces.len());
    }
    pieces
}

/// The first pinch point `(i, j)` with `i + 1 < j`. Both pieces are non-empty since `j < len`.
fn find_pinch_split<C: Real>(polygon: &Polygon<C>, tolerance: C) -> Option<(usize, usize)> {
    let vertices = polygon.vertices();
    let len = vertices.len();
    for i in 0..len {
        for j in i + 2..len {
            let diff = vertices[i] - vertices[j];
            if diff.x().abs() < tolerance && diff.y().abs() < tolerance {
                return Some((i, j));
            }
        }
    }
    None
}

/// Piece `a` holds vertices `i..j`, piece `b` holds `j..` wrapping around to `..i`
fn split_at<C: Real>(polygon: &Polygon<C>, i: usize, j: usize) -> (Polygon<C>, Polygon<C>) {
    let vertices = polygon.vertices();
    let a = vertices[i..j].to_vec();
    let b = vertices[j..].iter().chain(vertices[..i].iter()).copied().collect();
    (Polygon::new(a), Polygon::new(b))
}
