//! zoom and level dependent thresholds shared by the top-level and drill-down
//! clustering paths.
use crate::config::ClusterEngineConfig;
use uom::si::f64::Length;
use uom::si::length::meter;

/// merge radius for a zoom level and clustering level. the radius halves with
/// every zoom step and is divided by the level so that deeper drill-down
/// levels produce finer groups.
pub fn cluster_radius(config: &ClusterEngineConfig, zoom: u8, level: u32) -> Length {
    let zoom_factor = 2f64.powi(20 - i32::from(zoom));
    let meters = config.base_radius_meters * (zoom_factor / 10.0) / f64::from(level.max(1));
    Length::new::<meter>(meters)
}

/// number of listings closest to the map center that are always shown as
/// individual pins.
pub fn nearby_count(config: &ClusterEngineConfig, zoom: u8) -> usize {
    if zoom >= config.zoom_cluster_threshold {
        config.max_nearby_markers * 2
    } else {
        config.max_nearby_markers
    }
}

/// whether a top-level cluster is large enough to be split further. larger
/// clusters stay splittable longer as the user zooms in.
pub fn can_subdivide(config: &ClusterEngineConfig, members: usize, level: u32, zoom: u8) -> bool {
    if level >= config.max_cluster_levels || members <= config.min_cluster_size {
        return false;
    }
    let threshold = (5.0 - (f64::from(zoom) - 10.0) / 2.0).floor().max(3.0);
    members as f64 >= threshold
}

/// whether a drill-down subcluster can be split further. looser than
/// [`can_subdivide`] on purpose.
pub fn can_subdivide_subcluster(config: &ClusterEngineConfig, members: usize, level: u32) -> bool {
    members > 3 && level < config.max_cluster_levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meters(length: Length) -> f64 {
        length.get::<meter>()
    }

    #[test]
    fn test_radius_by_zoom() {
        let conf = ClusterEngineConfig::default();
        assert_eq!(meters(cluster_radius(&conf, 10, 1)), 51_200.0);
        assert_eq!(meters(cluster_radius(&conf, 12, 1)), 12_800.0);
        assert_eq!(meters(cluster_radius(&conf, 15, 1)), 1_600.0);
        assert_eq!(meters(cluster_radius(&conf, 20, 1)), 50.0);
    }

    #[test]
    fn test_radius_by_level() {
        let conf = ClusterEngineConfig::default();
        assert_eq!(meters(cluster_radius(&conf, 12, 2)), 6_400.0);
        assert_eq!(meters(cluster_radius(&conf, 12, 4)), 3_200.0);
    }

    #[test]
    fn test_nearby_count() {
        let conf = ClusterEngineConfig::default();
        assert_eq!(nearby_count(&conf, 10), 5);
        assert_eq!(nearby_count(&conf, 12), 5);
        assert_eq!(nearby_count(&conf, 13), 10);
        assert_eq!(nearby_count(&conf, 15), 10);
    }

    #[test]
    fn test_can_subdivide_threshold_follows_zoom() {
        let conf = ClusterEngineConfig::default();
        // zoom 8 needs 6 members, zoom 10 needs 5, zoom 11 needs 4, zoom 14 needs 3
        assert!(!can_subdivide(&conf, 5, 1, 8));
        assert!(can_subdivide(&conf, 6, 1, 8));
        assert!(!can_subdivide(&conf, 4, 1, 10));
        assert!(can_subdivide(&conf, 5, 1, 10));
        assert!(can_subdivide(&conf, 4, 1, 11));
        assert!(can_subdivide(&conf, 3, 1, 14));
    }

    #[test]
    fn test_can_subdivide_limits() {
        let conf = ClusterEngineConfig::default();
        assert!(!can_subdivide(&conf, 2, 1, 15));
        assert!(!can_subdivide(&conf, 50, 3, 12));
        assert!(can_subdivide(&conf, 50, 2, 12));
    }

    #[test]
    fn test_can_subdivide_subcluster() {
        let conf = ClusterEngineConfig::default();
        assert!(!can_subdivide_subcluster(&conf, 3, 2));
        assert!(can_subdivide_subcluster(&conf, 4, 2));
        assert!(!can_subdivide_subcluster(&conf, 40, 3));
    }
}
