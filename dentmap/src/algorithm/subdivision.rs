use crate::model::{Cluster, ClusterId, Listing};
use dentmap_core::util::geo_utils::haversine_distance;
use std::collections::VecDeque;
use uom::si::f64::Length;

/// splits the members of a selected cluster into subclusters. the first
/// unassigned member seeds a subcluster which absorbs every other unassigned
/// member within `radius` of the seed, until every member is assigned.
///
/// subclusters carry `parent` as their parent id. flags are left for the
/// caller to decide.
pub fn subdivide<'a, L: Listing>(
    members: Vec<&'a L>,
    radius: Length,
    level: u32,
    parent: &ClusterId,
) -> Vec<Cluster<'a, L>> {
    let mut remaining: VecDeque<&'a L> = members.into();
    let mut clusters = Vec::new();

    while let Some(seed) = remaining.pop_front() {
        let seed_location = seed.location();
        let mut cluster = Cluster::subcluster_seed(seed, level, parent.clone());
        let mut unassigned = VecDeque::with_capacity(remaining.len());
        for listing in remaining.drain(..) {
            if haversine_distance(&seed_location, &listing.location()) <= radius {
                cluster = cluster.with_member(listing);
            } else {
                unassigned.push_back(listing);
            }
        }
        remaining = unassigned;
        clusters.push(cluster);
    }

    log::debug!(
        "subdivided '{parent}' into {} subclusters at level {level}",
        clusters.len()
    );
    clusters
}
