mod candidate_index;
pub mod cluster_rules;
mod engine;
mod radius_merge;
mod subdivision;

pub use candidate_index::CandidateIndex;
pub use engine::ClusterEngine;
pub use radius_merge::radius_merge;
pub use subdivision::subdivide;
