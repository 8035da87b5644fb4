use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates ways to handle listings with NaN or out-of-range coordinates
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvalidLocationPolicy {
    #[default]
    Reject,
    Exclude,
}
