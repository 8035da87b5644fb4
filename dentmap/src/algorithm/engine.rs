use super::{cluster_rules, radius_merge, subdivide};
use crate::config::{ClusterEngineConfig, InvalidLocationPolicy, StragglerPolicy};
use crate::model::{Cluster, ClusterError, ClusterId, Listing, ViewState, Viewport};
use dentmap_core::util::geo_utils::haversine_distance;
use itertools::Itertools;
use uom::si::length::meter;

/// partitions listings into map markers for a viewport and drill-down state.
///
/// the engine holds only its configuration. every call recomputes clusters
/// from scratch and shares no state with other calls, so a single engine can
/// serve any number of maps.
#[derive(Clone, Debug)]
pub struct ClusterEngine {
    config: ClusterEngineConfig,
}

impl ClusterEngine {
    pub fn new(config: ClusterEngineConfig) -> Result<ClusterEngine, ClusterError> {
        config.validate()?;
        Ok(ClusterEngine { config })
    }

    pub fn config(&self) -> &ClusterEngineConfig {
        &self.config
    }

    /// groups `listings` into clusters for the given viewport.
    ///
    /// at the top level, the listings nearest the map center are always shown
    /// individually and the rest are merged by distance. when drilled into a
    /// cluster, only that cluster's members are regrouped with a tighter radius.
    ///
    /// # Arguments
    ///
    /// * `viewport` - map center, used to rank listings, and zoom level
    /// * `listings` - every candidate listing, with unique ids
    /// * `view_state` - top level, or the cluster the user drilled into
    ///
    /// # Returns
    ///
    /// * clusters to render, or an error for invalid coordinates or a
    ///   selection that matches none of the listings
    pub fn compute_clusters<'a, L: Listing>(
        &self,
        viewport: &Viewport,
        listings: &'a [L],
        view_state: &ViewState,
    ) -> Result<Vec<Cluster<'a, L>>, ClusterError> {
        if !viewport.center.is_valid() {
            return Err(ClusterError::InvalidViewportCenter {
                lat: viewport.center.lat,
                lng: viewport.center.lng,
            });
        }
        let accepted = self.accept_listings(listings)?;
        if accepted.is_empty() {
            return Ok(vec![]);
        }
        let accepted_count = accepted.len();

        let clusters = match view_state {
            ViewState::TopLevel => self.cluster_top_level(viewport, accepted, view_state.level()),
            ViewState::DrilledInto { selected } => {
                self.cluster_drill_down(viewport, accepted, selected)?
            }
        };
        log::debug!(
            "zoom {} at level {}: {} listings in {} clusters",
            viewport.zoom,
            view_state.level(),
            accepted_count,
            clusters.len()
        );
        Ok(clusters)
    }

    fn accept_listings<'a, L: Listing>(
        &self,
        listings: &'a [L],
    ) -> Result<Vec<&'a L>, ClusterError> {
        let mut accepted = Vec::with_capacity(listings.len());
        for listing in listings.iter() {
            let location = listing.location();
            if location.is_valid() {
                accepted.push(listing);
                continue;
            }
            match self.config.invalid_location_policy {
                InvalidLocationPolicy::Reject => {
                    return Err(ClusterError::InvalidListingLocation {
                        listing_id: listing.listing_id().to_string(),
                        lat: location.lat,
                        lng: location.lng,
                    })
                }
                InvalidLocationPolicy::Exclude => {
                    log::warn!(
                        "excluding listing '{}' with invalid location {location}",
                        listing.listing_id()
                    );
                }
            }
        }
        Ok(accepted)
    }

    fn cluster_top_level<'a, L: Listing>(
        &self,
        viewport: &Viewport,
        listings: Vec<&'a L>,
        level: u32,
    ) -> Vec<Cluster<'a, L>> {
        if viewport.zoom >= self.config.full_resolution_zoom {
            return full_resolution(listings, level);
        }
        let zoom = viewport.zoom;
        let radius = cluster_rules::cluster_radius(&self.config, zoom, level);
        log::debug!(
            "clustering {} listings at zoom {zoom} with radius {:.1}m",
            listings.len(),
            radius.get::<meter>()
        );

        // stable sort, so equidistant listings keep their input order
        let mut ranked = listings
            .into_iter()
            .map(|l| (haversine_distance(&viewport.center, &l.location()), l))
            .collect_vec();
        ranked.sort_by(|(a, _), (b, _)| a.get::<meter>().total_cmp(&b.get::<meter>()));
        let ranked = ranked.into_iter().map(|(_, l)| l).collect_vec();

        let nearby_count = cluster_rules::nearby_count(&self.config, zoom).min(ranked.len());
        let (nearby, far) = ranked.split_at(nearby_count);

        let mut clusters = nearby
            .iter()
            .map(|l| Cluster::single(*l, level))
            .collect_vec();

        for cluster in radius_merge(far, radius, level, self.config.candidate_search) {
            if cluster.len() >= self.config.min_cluster_size {
                clusters.push(cluster);
                continue;
            }
            match self.config.straggler_policy {
                StragglerPolicy::Promote => clusters.extend(
                    cluster
                        .into_members()
                        .into_iter()
                        .map(|l| Cluster::single(l, level)),
                ),
                StragglerPolicy::Drop => {
                    log::debug!("dropping straggler cluster '{}'", cluster.id());
                }
            }
        }

        clusters
            .into_iter()
            .map(|c| {
                let can_subdivide =
                    cluster_rules::can_subdivide(&self.config, c.len(), level, zoom);
                c.with_can_subdivide(can_subdivide)
            })
            .collect_vec()
    }

    fn cluster_drill_down<'a, L: Listing>(
        &self,
        viewport: &Viewport,
        listings: Vec<&'a L>,
        selected: &ClusterId,
    ) -> Result<Vec<Cluster<'a, L>>, ClusterError> {
        let members = listings
            .into_iter()
            .filter(|l| selected.contains(l.listing_id()))
            .collect_vec();
        if members.is_empty() {
            return Err(ClusterError::SelectedClusterNotFound(selected.to_string()));
        }
        if members.len() < selected.member_ids().len() {
            log::warn!(
                "only {} of {} members of '{selected}' are in the listing set",
                members.len(),
                selected.member_ids().len()
            );
        }

        if selected.level() >= self.config.max_cluster_levels {
            log::debug!("'{selected}' is at the deepest level, regrouping without subdividing");
            return Ok(self.cluster_top_level(viewport, members, selected.level()));
        }

        // the radius follows the selected cluster's level, its subclusters sit one level deeper
        let level = selected.level() + 1;
        if viewport.zoom >= self.config.full_resolution_zoom {
            return Ok(full_resolution(members, level));
        }

        let radius = cluster_rules::cluster_radius(&self.config, viewport.zoom, selected.level())
            * self.config.subdivision_radius_factor;
        let clusters = subdivide(members, radius, level, selected)
            .into_iter()
            .map(|c| {
                let can_subdivide =
                    cluster_rules::can_subdivide_subcluster(&self.config, c.len(), level);
                let c = c.with_can_subdivide(can_subdivide);
                if c.len() == 1 {
                    c.as_individual()
                } else {
                    c
                }
            })
            .collect_vec();
        Ok(clusters)
    }
}

/// one pin per listing, used once the map is zoomed in far enough that
/// markers no longer overlap
fn full_resolution<'a, L: Listing>(listings: Vec<&'a L>, level: u32) -> Vec<Cluster<'a, L>> {
    listings
        .into_iter()
        .map(|l| Cluster::single(l, level))
        .collect_vec()
}
