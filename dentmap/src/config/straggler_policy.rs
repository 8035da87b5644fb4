use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates ways to handle far listings whose radius cluster
/// never reached the minimum cluster size
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StragglerPolicy {
    /// show each straggler as an individual pin
    #[default]
    Promote,
    /// leave stragglers off the map
    Drop,
}
