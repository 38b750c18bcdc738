mod polygon_vec_builder;
pub use polygon_vec_builder::PolygonVecBuilder;
mod vec_vec_polygon_builder;
pub use vec_vec_polygon_builder::VecVecPolygonBuilder;
