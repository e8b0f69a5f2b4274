pub mod traits;
pub mod dijkstra;
pub mod yen;
pub mod matrix;

pub use traits::{PathDetail, PathSearch, SearchConstraints, WeightedPath};
