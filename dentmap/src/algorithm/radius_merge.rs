use super::CandidateIndex;
use crate::config::CandidateSearchPolicy;
use crate::model::{Cluster, Listing};
use uom::si::f64::Length;

/// greedy single-pass aggregation. each listing joins the first-created
/// cluster whose current center is within `radius`, otherwise it seeds a new
/// cluster. the result depends on the order of `ranked`, which callers keep
/// sorted by distance from the map center.
///
/// # Arguments
///
/// * `ranked` - listings in traversal order
/// * `radius` - maximum distance between a listing and a cluster center
/// * `level` - clustering level stamped on every cluster
/// * `policy` - how candidate clusters are looked up
///
/// # Returns
///
/// * clusters in creation order, none of them flagged as nearby
pub fn radius_merge<'a, L: Listing>(
    ranked: &[&'a L],
    radius: Length,
    level: u32,
    policy: CandidateSearchPolicy,
) -> Vec<Cluster<'a, L>> {
    let mut clusters: Vec<Cluster<'a, L>> = Vec::new();
    let mut index = CandidateIndex::new(policy);

    for listing in ranked.iter().copied() {
        let location = listing.location();
        match index.first_within(&clusters, &location, radius) {
            Some(idx) => {
                let previous = clusters[idx].center();
                // take the cluster out, rebuild it, and put it back in the same slot
                let last = clusters.len() - 1;
                let grown = clusters.swap_remove(idx).with_member(listing);
                let current = grown.center();
                clusters.push(grown);
                clusters.swap(idx, last);
                index.relocate(idx, &previous, &current);
            }
            None => {
                index.insert(clusters.len(), &location);
                clusters.push(Cluster::seed(listing, level));
            }
        }
    }

    log::debug!(
        "radius merge at level {level} grouped {} listings into {} clusters",
        ranked.len(),
        clusters.len()
    );
    clusters
}
