use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how the radius merge finds the first existing cluster within reach of a listing.
/// both strategies produce the same clusters.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSearchPolicy {
    /// scan every cluster in creation order, O(n·k)
    Linear,
    /// query an R-tree of cluster centers
    #[default]
    Rtree,
}
