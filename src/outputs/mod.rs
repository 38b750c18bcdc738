pub mod builders;

mod polygon_builder;
pub use polygon_builder::PolygonBuilder;
mod polygon_winding;
pub use polygon_winding::PolygonWinding;
