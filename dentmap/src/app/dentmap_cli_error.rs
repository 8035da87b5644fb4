use crate::model::ClusterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DentmapCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure clustering listings: {source}")]
    ClusterError {
        #[from]
        source: ClusterError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
