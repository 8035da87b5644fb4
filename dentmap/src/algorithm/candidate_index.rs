use crate::config::CandidateSearchPolicy;
use crate::model::{Cluster, Listing};
use dentmap_core::util::geo_utils::{haversine_distance, EARTH_RADIUS_METERS};
use dentmap_core::util::GeoPoint;
use rstar::primitives::GeomWithData;
use rstar::{RTree, AABB};
use std::f64::consts::PI;
use uom::si::f64::Length;
use uom::si::length::meter;

/// cluster center in (lng, lat) order, tagged with the cluster's creation index
pub type IndexedCenter = GeomWithData<[f64; 2], usize>;

/// slack added to search envelopes so that rounding never hides a cluster
/// sitting exactly on the radius.
const ENVELOPE_PADDING_DEGREES: f64 = 1e-6;

/// finds the first-created cluster whose center lies within a radius of a
/// listing. the R-tree variant returns the same cluster as the linear scan:
/// it only prunes by a degree envelope that covers the whole search circle
/// and then picks the lowest creation index among the true matches.
pub enum CandidateIndex {
    Linear,
    RTree(RTree<IndexedCenter>),
}

impl CandidateIndex {
    pub fn new(policy: CandidateSearchPolicy) -> CandidateIndex {
        match policy {
            CandidateSearchPolicy::Linear => CandidateIndex::Linear,
            CandidateSearchPolicy::Rtree => CandidateIndex::RTree(RTree::new()),
        }
    }

    /// registers the center of the cluster created at `index`
    pub fn insert(&mut self, index: usize, center: &GeoPoint) {
        if let CandidateIndex::RTree(tree) = self {
            tree.insert(GeomWithData::new([center.lng, center.lat], index));
        }
    }

    /// moves the cluster at `index` after a merge shifted its center
    pub fn relocate(&mut self, index: usize, previous: &GeoPoint, current: &GeoPoint) {
        if let CandidateIndex::RTree(tree) = self {
            let removed = tree.remove(&GeomWithData::new([previous.lng, previous.lat], index));
            if removed.is_none() {
                log::warn!("cluster {index} was not found at {previous} in the candidate index");
            }
            tree.insert(GeomWithData::new([current.lng, current.lat], index));
        }
    }

    pub fn first_within<L: Listing>(
        &self,
        clusters: &[Cluster<'_, L>],
        location: &GeoPoint,
        radius: Length,
    ) -> Option<usize> {
        let within = |idx: &usize| haversine_distance(location, &clusters[*idx].center()) <= radius;
        match self {
            CandidateIndex::Linear => (0..clusters.len()).find(within),
            CandidateIndex::RTree(tree) => tree
                .locate_in_envelope_intersecting(&search_envelope(location, radius))
                .map(|obj| obj.data)
                .filter(within)
                .min(),
        }
    }
}

/// degree-space rectangle covering every point within `radius` of `location`
/// on the sphere. falls back to the full longitude range when the circle
/// reaches a pole or crosses the antimeridian.
pub fn search_envelope(location: &GeoPoint, radius: Length) -> AABB<[f64; 2]> {
    let delta = radius.get::<meter>() / EARTH_RADIUS_METERS;
    if delta >= PI {
        return AABB::from_corners([-180.0, -90.0], [180.0, 90.0]);
    }
    let d_lat = delta.to_degrees() + ENVELOPE_PADDING_DEGREES;
    let min_lat = location.lat - d_lat;
    let max_lat = location.lat + d_lat;

    let (min_lng, max_lng) = if min_lat <= -90.0 || max_lat >= 90.0 {
        (-180.0, 180.0)
    } else {
        // widest longitude offset of a spherical cap that does not contain a pole
        let ratio = (delta.sin() / location.lat.to_radians().cos()).min(1.0);
        let d_lng = ratio.asin().to_degrees() + ENVELOPE_PADDING_DEGREES;
        if location.lng - d_lng < -180.0 || location.lng + d_lng > 180.0 {
            (-180.0, 180.0)
        } else {
            (location.lng - d_lng, location.lng + d_lng)
        }
    };

    AABB::from_corners([min_lng, min_lat.max(-90.0)], [max_lng, max_lat.min(90.0)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListingRecord;
    use rstar::Envelope;

    #[test]
    fn test_envelope_covers_circle() {
        let center = GeoPoint::new(40.0, -111.0);
        let radius = Length::new::<meter>(5_000.0);
        let envelope = search_envelope(&center, radius);

        // points just inside the radius in each cardinal direction
        let d_lat = 4_999.0 / EARTH_RADIUS_METERS * 180.0 / PI;
        let d_lng = d_lat / 40f64.to_radians().cos();
        for (lat, lng) in [
            (40.0 + d_lat, -111.0),
            (40.0 - d_lat, -111.0),
            (40.0, -111.0 + d_lng),
            (40.0, -111.0 - d_lng),
        ] {
            let p = GeoPoint::new(lat, lng);
            assert!(haversine_distance(&center, &p) <= radius);
            assert!(envelope.contains_point(&[lng, lat]), "missing {p}");
        }
    }

    #[test]
    fn test_envelope_near_antimeridian_and_pole() {
        let radius = Length::new::<meter>(50_000.0);
        let east = search_envelope(&GeoPoint::new(0.0, 179.9), radius);
        assert_eq!(east.lower()[0], -180.0);
        assert_eq!(east.upper()[0], 180.0);

        let north = search_envelope(&GeoPoint::new(89.9, 10.0), radius);
        assert_eq!(north.lower()[0], -180.0);
        assert_eq!(north.upper()[1], 90.0);
    }

    #[test]
    fn test_envelope_whole_world() {
        let radius = Length::new::<meter>(30_000_000.0);
        let envelope = search_envelope(&GeoPoint::new(10.0, 10.0), radius);
        assert_eq!(envelope.lower(), [-180.0, -90.0]);
        assert_eq!(envelope.upper(), [180.0, 90.0]);
    }

    #[test]
    fn test_rtree_prefers_first_created() {
        let a = ListingRecord::new("a", 40.0, -111.0);
        let b = ListingRecord::new("b", 40.0005, -111.0);
        let clusters = vec![Cluster::seed(&a, 1), Cluster::seed(&b, 1)];

        let mut rtree = CandidateIndex::new(CandidateSearchPolicy::Rtree);
        // insert out of order to make sure creation order, not tree order, decides
        rtree.insert(1, &b.location);
        rtree.insert(0, &a.location);
        let linear = CandidateIndex::new(CandidateSearchPolicy::Linear);

        let probe = GeoPoint::new(40.0003, -111.0);
        let radius = Length::new::<meter>(100.0);
        assert_eq!(rtree.first_within(&clusters, &probe, radius), Some(0));
        assert_eq!(linear.first_within(&clusters, &probe, radius), Some(0));

        let far = GeoPoint::new(41.0, -111.0);
        assert_eq!(rtree.first_within(&clusters, &far, radius), None);
        assert_eq!(linear.first_within(&clusters, &far, radius), None);
    }

    #[test]
    fn test_relocate() {
        let a = ListingRecord::new("a", 40.0, -111.0);
        let b = ListingRecord::new("b", 40.01, -111.0);
        let merged = Cluster::seed(&a, 1).with_member(&b);
        let clusters = vec![merged];

        let mut rtree = CandidateIndex::new(CandidateSearchPolicy::Rtree);
        rtree.insert(0, &a.location);
        rtree.relocate(0, &a.location, &clusters[0].center());

        // only reachable from the new midpoint at 40.005
        let probe = GeoPoint::new(40.0055, -111.0);
        let radius = Length::new::<meter>(100.0);
        assert_eq!(rtree.first_within(&clusters, &probe, radius), Some(0));
        if let CandidateIndex::RTree(tree) = &rtree {
            assert_eq!(tree.size(), 1);
        }
    }
}
