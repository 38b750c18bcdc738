use num_traits::real::Real;

#[cfg(feature = "debugging")]
use crate::debug::svg::{SvgOutputLevel, SvgRecorder};
use crate::{DecompositionError, GeometryError, Polygon, PolygonBuilder, Preprocess, Settings, Triangle, builder_state::PolygonBuilderState, earclip, hull, pinch, polygonize, trace};

/// Convex polygons produced by a decomposition, plus a report of anything that was lost along the way
#[derive(Debug)]
pub struct Decomposition<O> {
    /// The [PolygonBuilder::Output]
    pub polygons: O,
    /// [Some] if any part of the input could not be covered by the output polygons
    pub partial: Option<PartialResult>,
}

/// Describes the parts of a decomposition which fell short of a full cover of the input.
///
/// Not an error: at least one polygon was still produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialResult {
    /// Pinch-split pieces which could not be triangulated at all
    pub failed_pieces: usize,
    /// Triangles missing from pieces where ear clipping stopped early
    pub missing_triangles: usize,
    /// Output polygons discarded because their area was at most [Settings::epsilon] times the squared extent of the outline
    pub dropped_polygons: usize,
}

impl PartialResult {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub(crate) fn do_decompose<C: Real, PB: PolygonBuilder<C>>(input: Polygon<C>, settings: &Settings<C>, initializer: PB::Initializer) -> Result<Decomposition<PB::Output>, DecompositionError<PB::Error>> {
    let mut pbs = PolygonBuilderState::<C, PB>::new(initializer);
    // Separate out the actual decomposition logic, so PolygonBuilder error handling can be consolidated to one location
    let (result, partial) = match decompose_inner(input, settings, &mut pbs) {
        Ok(partial) => (Ok(()), partial),
        Err(err) => (Err(err), None),
    };
    let polygons = pbs.complete(result)?;
    Ok(Decomposition { polygons, partial })
}

fn decompose_inner<C: Real, PB: PolygonBuilder<C>>(input: Polygon<C>, settings: &Settings<C>, pbs: &mut PolygonBuilderState<C, PB>) -> Result<Option<PartialResult>, DecompositionError<PB::Error>> {
    #[cfg(feature = "debugging")]
    let mut svg = SvgRecorder::new(input.vertices());
    #[cfg(feature = "debugging")]
    svg.record("input", std::slice::from_ref(&input), SvgOutputLevel::AllStages);

    let polygon = sanitize(input, settings).map_err(DecompositionError::Geometry)?;
    let outline = preprocess(polygon, settings).map_err(DecompositionError::Geometry)?;
    #[cfg(feature = "debugging")]
    svg.record("outline", std::slice::from_ref(&outline), SvgOutputLevel::AllStages);

    let pieces = pinch::split_pinch_points(&outline, settings);
    if pieces.is_empty() {
        return Err(DecompositionError::Geometry(GeometryError::DegenerateInput));
    }
    #[cfg(feature = "debugging")]
    svg.record("pieces", &pieces, SvgOutputLevel::AllStages);

    let mut partial = PartialResult::default();
    let triangles = triangulate_pieces(&pieces, &mut partial).map_err(DecompositionError::Geometry)?;
    #[cfg(feature = "debugging")]
    svg.record("triangles", &triangles, SvgOutputLevel::AllStages);

    let mut polygons = polygonize::polygonize(&triangles, settings);
    let before = polygons.len();
    // Rounding noise in an area grows with the square of the coordinates
    let extent = outline.extent();
    let min_area = settings.epsilon * extent * extent;
    polygons.retain(|p| p.area().abs() > min_area);
    partial.dropped_polygons = before - polygons.len();
    for polygon in polygons.iter_mut().filter(|p| !p.is_ccw()) {
        polygon.reverse();
    }
    if polygons.is_empty() {
        return Err(DecompositionError::internal(format!("All {} polygons merged from {} triangles were degenerate", before, triangles.len())));
    }
    #[cfg(feature = "debugging")]
    svg.record("result", &polygons, SvgOutputLevel::ResultOnly);

    for polygon in &polygons {
        pbs.add_polygon(polygon)?;
    }

    log::debug!("Decomposed {} vertex outline into {} pieces, {} triangles, {} convex polygons", outline.len(), pieces.len(), triangles.len(), polygons.len());
    if partial.is_empty() {
        Ok(None)
    } else {
        log::warn!("Decomposition is partial: {:?}", partial);
        Ok(Some(partial))
    }
}

/// Collapses adjacent duplicates and rejects input which cannot enclose any area
fn sanitize<C: Real>(mut polygon: Polygon<C>, settings: &Settings<C>) -> Result<Polygon<C>, GeometryError> {
    if polygon.len() < 3 {
        return Err(GeometryError::NotEnoughVertices(polygon.len()));
    }
    let removed = polygon.remove_duplicate_vertices();
    if removed > 0 {
        log::trace!("Removed {} duplicate vertices", removed);
    }
    if polygon.len() < 3 {
        return Err(GeometryError::NotEnoughVertices(polygon.len()));
    }

    // Adjacent vertices are now distinct, so the first edge gives a direction
    let origin = polygon[0];
    let direction = polygon[1] - origin;
    let collinear = polygon.vertices().iter().all(|&v| (v - origin).cross(direction).abs() <= settings.epsilon);
    if collinear {
        return Err(GeometryError::DegenerateInput);
    }
    Ok(polygon)
}

fn preprocess<C: Real>(polygon: Polygon<C>, settings: &Settings<C>) -> Result<Polygon<C>, GeometryError> {
    match settings.preprocess {
        Preprocess::ConvexHull => hull::convex_hull(polygon.vertices(), settings),
        Preprocess::TraceEdges => trace::trace_edges(&polygon, settings),
        Preprocess::Auto if !polygon.is_simple(settings.epsilon) => {
            log::debug!("Input is self-intersecting, tracing edges");
            trace::trace_edges(&polygon, settings)
        }
        Preprocess::Auto => Ok(polygon),
    }
}

/// Pools the triangles of every piece. Only fails if no piece yields a single triangle.
pub(crate) fn triangulate_pieces<C: Real>(pieces: &[Polygon<C>], partial: &mut PartialResult) -> Result<Vec<Triangle<C>>, GeometryError> {
    let mut triangles = Vec::new();
    let mut last_error = None;
    for piece in pieces {
        match earclip::triangulate(piece) {
            Ok(triangulation) => {
                partial.missing_triangles += (piece.len() - 2) - triangulation.triangles.len();
                triangles.extend(triangulation.triangles);
            }
            Err(err) => {
                log::warn!("Failed to triangulate {} vertex piece: {}", piece.len(), err);
                partial.failed_pieces += 1;
                last_error = Some(err);
            }
        }
    }

    if triangles.is_empty() {
        return Err(last_error.unwrap_or_else(|| GeometryError::inconsistency("No pieces to triangulate")));
    }
    Ok(triangles)
}
