/// The order the vertices of an output polygon are listed in
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PolygonWinding {
    Counterclockwise,
    Clockwise,
}
