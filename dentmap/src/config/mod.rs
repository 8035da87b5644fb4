mod candidate_search_policy;
mod cluster_engine_config;
mod invalid_location_policy;
mod straggler_policy;

pub use candidate_search_policy::CandidateSearchPolicy;
pub use cluster_engine_config::ClusterEngineConfig;
pub use invalid_location_policy::InvalidLocationPolicy;
pub use straggler_policy::StragglerPolicy;
