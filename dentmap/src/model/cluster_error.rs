use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("listing '{listing_id}' has an invalid location ({lat}, {lng})")]
    InvalidListingLocation {
        listing_id: String,
        lat: f64,
        lng: f64,
    },
    #[error("viewport center ({lat}, {lng}) is not a valid WGS84 coordinate")]
    InvalidViewportCenter { lat: f64, lng: f64 },
    #[error("none of the members of selected cluster '{0}' are in the listing set")]
    SelectedClusterNotFound(String),
    #[error("invalid clustering configuration: {0}")]
    ConfigurationError(String),
}
