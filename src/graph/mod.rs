pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use directed::WeightedDigraph;
