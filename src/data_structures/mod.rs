pub mod candidate_pool;
pub mod cost_matrix;
pub mod priority_queue;

pub use candidate_pool::CandidatePool;
pub use cost_matrix::CostMatrix;
pub use priority_queue::BinaryHeapWrapper;
