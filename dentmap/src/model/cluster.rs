use super::{ClusterId, Listing};
use dentmap_core::util::{geo_utils, GeoPoint};
use geo::Rect;
use serde::Serialize;

/// a group of listings rendered as one marker.
///
/// clusters are values: growing a cluster consumes it and returns a new one
/// with the bounds, center and id recomputed, so no intermediate state is
/// ever shared between two clusters.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster<'a, L> {
    id: ClusterId,
    center: GeoPoint,
    bounds: Rect<f64>,
    members: Vec<&'a L>,
    is_nearby: bool,
    level: u32,
    can_subdivide: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_cluster_id: Option<ClusterId>,
}

impl<'a, L: Listing> Cluster<'a, L> {
    /// an individual pin that is never merged with its neighbors.
    pub fn single(listing: &'a L, level: u32) -> Cluster<'a, L> {
        let location = listing.location();
        Cluster {
            id: ClusterId::single(listing.listing_id(), level),
            center: location,
            bounds: geo_utils::point_bounds(&location),
            members: vec![listing],
            is_nearby: true,
            level,
            can_subdivide: false,
            parent_cluster_id: None,
        }
    }

    /// the first member of a radius-aggregated cluster.
    pub fn seed(listing: &'a L, level: u32) -> Cluster<'a, L> {
        let location = listing.location();
        Cluster {
            id: ClusterId::aggregate([listing.listing_id()], level),
            center: location,
            bounds: geo_utils::point_bounds(&location),
            members: vec![listing],
            is_nearby: false,
            level,
            can_subdivide: false,
            parent_cluster_id: None,
        }
    }

    /// the first member of a drill-down subcluster of `parent`.
    pub fn subcluster_seed(listing: &'a L, level: u32, parent: ClusterId) -> Cluster<'a, L> {
        let location = listing.location();
        Cluster {
            id: ClusterId::subcluster(listing.listing_id(), level),
            center: location,
            bounds: geo_utils::point_bounds(&location),
            members: vec![listing],
            is_nearby: false,
            level,
            can_subdivide: false,
            parent_cluster_id: Some(parent),
        }
    }

    /// rebuilds this cluster with one more member. the center becomes the
    /// midpoint of the extended bounding box.
    pub fn with_member(self, listing: &'a L) -> Cluster<'a, L> {
        let bounds = geo_utils::extend_bounds(&self.bounds, &listing.location());
        let mut members = self.members;
        members.push(listing);
        let id = ClusterId::aggregate(members.iter().map(|m| m.listing_id()), self.level);
        Cluster {
            id,
            center: geo_utils::bounds_midpoint(&bounds),
            bounds,
            members,
            ..self
        }
    }

    pub fn with_can_subdivide(self, can_subdivide: bool) -> Cluster<'a, L> {
        Cluster {
            can_subdivide,
            ..self
        }
    }

    /// flags this cluster to be drawn as individual pins rather than an aggregate.
    pub fn as_individual(self) -> Cluster<'a, L> {
        Cluster {
            is_nearby: true,
            ..self
        }
    }

    pub fn into_members(self) -> Vec<&'a L> {
        self.members
    }
}

impl<'a, L> Cluster<'a, L> {
    pub fn id(&self) -> &ClusterId {
        &self.id
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn bounds(&self) -> &Rect<f64> {
        &self.bounds
    }

    pub fn members(&self) -> &[&'a L] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// always false, clusters are built from at least one listing
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_nearby(&self) -> bool {
        self.is_nearby
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn can_subdivide(&self) -> bool {
        self.can_subdivide
    }

    pub fn parent_cluster_id(&self) -> Option<&ClusterId> {
        self.parent_cluster_id.as_ref()
    }
}
