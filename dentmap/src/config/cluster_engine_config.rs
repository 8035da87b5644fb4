use super::{CandidateSearchPolicy, InvalidLocationPolicy, StragglerPolicy};
use crate::model::ClusterError;
use serde::{Deserialize, Serialize};

/// tuning parameters for marker clustering. the defaults are calibrated to
/// standard web-map zoom levels (0-21).
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ClusterEngineConfig {
    /// merge radius at zoom 10 is `base_radius_meters * 102.4`, halving with every zoom step
    pub base_radius_meters: f64,
    pub min_cluster_size: usize,
    /// zoom at which the nearby tier doubles in size
    pub zoom_cluster_threshold: u8,
    pub max_nearby_markers: usize,
    pub max_cluster_levels: u32,
    /// zoom at which clustering is skipped and every listing gets its own pin
    pub full_resolution_zoom: u8,
    /// shrinks the merge radius when subdividing a selected cluster
    pub subdivision_radius_factor: f64,
    /// zooming out below this level leaves any drill-down
    pub reset_zoom: u8,
    pub straggler_policy: StragglerPolicy,
    pub invalid_location_policy: InvalidLocationPolicy,
    pub candidate_search: CandidateSearchPolicy,
}

impl Default for ClusterEngineConfig {
    fn default() -> Self {
        Self {
            base_radius_meters: 500.0,
            min_cluster_size: 2,
            zoom_cluster_threshold: 13,
            max_nearby_markers: 5,
            max_cluster_levels: 3,
            full_resolution_zoom: 16,
            subdivision_radius_factor: 0.6,
            reset_zoom: 12,
            straggler_policy: StragglerPolicy::default(),
            invalid_location_policy: InvalidLocationPolicy::default(),
            candidate_search: CandidateSearchPolicy::default(),
        }
    }
}

impl ClusterEngineConfig {
    pub fn validate(&self) -> Result<(), ClusterError> {
        if !self.base_radius_meters.is_finite() || self.base_radius_meters <= 0.0 {
            return Err(ClusterError::ConfigurationError(format!(
                "base_radius_meters must be a positive number, found {}",
                self.base_radius_meters
            )));
        }
        if self.min_cluster_size == 0 {
            return Err(ClusterError::ConfigurationError(String::from(
                "min_cluster_size must be at least 1",
            )));
        }
        if self.max_cluster_levels == 0 {
            return Err(ClusterError::ConfigurationError(String::from(
                "max_cluster_levels must be at least 1",
            )));
        }
        if !(self.subdivision_radius_factor > 0.0 && self.subdivision_radius_factor <= 1.0) {
            return Err(ClusterError::ConfigurationError(format!(
                "subdivision_radius_factor must be in (0, 1], found {}",
                self.subdivision_radius_factor
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for ClusterEngineConfig {
    type Error = ClusterError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ClusterError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                ClusterError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ClusterError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                ClusterError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(ClusterError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let conf = ClusterEngineConfig::default();
        assert_eq!(conf.base_radius_meters, 500.0);
        assert_eq!(conf.min_cluster_size, 2);
        assert_eq!(conf.zoom_cluster_threshold, 13);
        assert_eq!(conf.max_nearby_markers, 5);
        assert_eq!(conf.max_cluster_levels, 3);
        assert_eq!(conf.full_resolution_zoom, 16);
        assert_eq!(conf.straggler_policy, StragglerPolicy::Promote);
        assert!(conf.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let conf: ClusterEngineConfig = toml::from_str(
            r#"
            base_radius_meters = 250.0
            max_nearby_markers = 3
            straggler_policy = "drop"
            candidate_search = "linear"
            "#,
        )
        .unwrap();
        assert_eq!(conf.base_radius_meters, 250.0);
        assert_eq!(conf.max_nearby_markers, 3);
        assert_eq!(conf.straggler_policy, StragglerPolicy::Drop);
        assert_eq!(conf.candidate_search, CandidateSearchPolicy::Linear);
        // untouched fields keep their defaults
        assert_eq!(conf.full_resolution_zoom, 16);
        assert_eq!(conf.invalid_location_policy, InvalidLocationPolicy::Reject);
    }

    #[test]
    fn test_json() {
        let conf: ClusterEngineConfig =
            serde_json::from_str(r#"{"invalid_location_policy": "exclude", "reset_zoom": 10}"#)
                .unwrap();
        assert_eq!(conf.invalid_location_policy, InvalidLocationPolicy::Exclude);
        assert_eq!(conf.reset_zoom, 10);
    }

    #[test]
    fn test_validation() {
        let bad_radius = ClusterEngineConfig {
            base_radius_meters: 0.0,
            ..Default::default()
        };
        assert!(bad_radius.validate().is_err());

        let nan_radius = ClusterEngineConfig {
            base_radius_meters: f64::NAN,
            ..Default::default()
        };
        assert!(nan_radius.validate().is_err());

        let no_levels = ClusterEngineConfig {
            max_cluster_levels: 0,
            ..Default::default()
        };
        assert!(no_levels.validate().is_err());

        let bad_factor = ClusterEngineConfig {
            subdivision_radius_factor: 1.5,
            ..Default::default()
        };
        assert!(bad_factor.validate().is_err());

        let no_nearby = ClusterEngineConfig {
            max_nearby_markers: 0,
            ..Default::default()
        };
        assert!(no_nearby.validate().is_ok());
    }

    #[test]
    fn test_unsupported_file_type() {
        let result = ClusterEngineConfig::try_from(&String::from("dentmap.yaml"));
        match result {
            Err(ClusterError::ConfigurationError(msg)) => {
                assert!(msg.contains("unsupported file type"))
            }
            other => panic!("expected configuration error, found {other:?}"),
        }
    }
}
