mod decompose;
pub use decompose::Decompose;
mod vertex;
pub use vertex::{Coords, Vertex, VertexNew};
