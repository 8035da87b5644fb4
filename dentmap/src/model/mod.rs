mod cluster;
mod cluster_error;
mod cluster_id;
mod listing;
mod view_state;
mod viewport;

pub use cluster::Cluster;
pub use cluster_error::ClusterError;
pub use cluster_id::{ClusterId, ClusterKind};
pub use listing::{Listing, ListingRecord};
pub use view_state::ViewState;
pub use viewport::Viewport;
