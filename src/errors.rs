use std::{error, fmt};

use backtrace::Backtrace;

/// The broad category of a [GeometryError]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not describe an area (too few points, or all points collinear)
    InvalidInput,
    /// A stage reached a state its geometry should not allow, usually caused by numerically pathological input
    GeometricInconsistency,
}

/// Describes an error which occurred in one of the decomposition stages
#[derive(Debug)]
#[non_exhaustive]
pub enum GeometryError {
    /// A polygon or point cloud was encountered with fewer than 3 vertices
    NotEnoughVertices(usize),
    /// All vertices are collinear or collapse onto each other
    DegenerateInput,
    /// A stage invariant was violated, e.g. the edge tracer failed to close its boundary walk
    Inconsistency(InternalError),
}

impl GeometryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotEnoughVertices(_) | Self::DegenerateInput => ErrorKind::InvalidInput,
            Self::Inconsistency(_) => ErrorKind::GeometricInconsistency,
        }
    }

    #[cold]
    #[inline(always)]
    pub(crate) fn inconsistency(msg: impl Into<String>) -> Self {
        Self::Inconsistency(InternalError::new(msg))
    }
}

impl error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Inconsistency(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughVertices(vertices) => write!(f, "Polygon only contains {} vertices", vertices),
            Self::DegenerateInput => write!(f, "Polygon vertices do not enclose any area"),
            Self::Inconsistency(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl From<InternalError> for GeometryError {
    fn from(error: InternalError) -> Self {
        Self::Inconsistency(error)
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an error which occurred during decomposition
#[derive(Debug)]
#[non_exhaustive]
pub enum DecompositionError<PBError: error::Error> {
    /// No usable polygon could be produced from the input
    Geometry(GeometryError),
    /// The [PolygonBuilder](crate::PolygonBuilder) returned an error.
    PolygonBuilder(PBError),
}

impl<PBError: error::Error> DecompositionError<PBError> {
    /// The [ErrorKind] of a geometric failure, or [None] if the [PolygonBuilder](crate::PolygonBuilder) failed
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Geometry(error) => Some(error.kind()),
            Self::PolygonBuilder(_) => None,
        }
    }

    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        DecompositionError::Geometry(GeometryError::inconsistency(msg))
    }
}

impl<PBError: error::Error> From<PBError> for DecompositionError<PBError> {
    fn from(e: PBError) -> Self {
        Self::PolygonBuilder(e)
    }
}

impl<PBError: error::Error> fmt::Display for DecompositionError<PBError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(error) => fmt::Display::fmt(error, f),
            Self::PolygonBuilder(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl<PBError: error::Error> std::error::Error for DecompositionError<PBError> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(error) => Some(error),
            Self::PolygonBuilder(error) => error.source(), // This should be Some(error), but that forces restricting PBError to 'static.
        }
    }
}

/// Describes why a convex polygon is unsuitable as a collision shape.
///
/// Returned by [Polygon::validate](crate::Polygon::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum UsabilityError {
    /// Fewer than 3 vertices
    TooFewVertices(usize),
    /// More vertices than [Settings::max_shape_vertices](crate::Settings::max_shape_vertices)
    TooManyVertices(usize),
    NotConvex,
    /// Two edges cross each other
    NotSimple,
    /// Signed area below epsilon (this includes every clockwise polygon)
    AreaTooSmall,
    /// Two adjacent edges turn by less than the angular slop
    NearlyParallelEdges,
    /// A vertex lies within the linear slop of a non-adjacent edge's supporting line
    TooThin,
    /// Shrinking the edges inward by the linear slop would move one past the centroid
    CoreCrossesCentroid,
}

impl error::Error for UsabilityError { }

impl fmt::Display for UsabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices(vertices) => write!(f, "Polygon has {} vertices, must have at least 3", vertices),
            Self::TooManyVertices(vertices) => write!(f, "Polygon has {} vertices, more than a collision shape supports", vertices),
            Self::NotConvex => write!(f, "Polygon must be convex"),
            Self::NotSimple => write!(f, "Polygon must be simple (cannot intersect itself)"),
            Self::AreaTooSmall => write!(f, "Polygon area is too small"),
            Self::NearlyParallelEdges => write!(f, "Polygon sides are too close to parallel"),
            Self::TooThin => write!(f, "Polygon is too thin"),
            Self::CoreCrossesCentroid => write!(f, "Core shape generation would move an edge past the centroid"),
        }
    }
}
