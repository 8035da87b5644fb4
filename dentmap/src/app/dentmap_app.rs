use super::DentmapCliError;
use crate::{
    algorithm::ClusterEngine,
    config::ClusterEngineConfig,
    model::{ClusterId, ListingRecord, ViewState, Viewport},
};
use clap::{Parser, Subcommand};
use dentmap_core::util::GeoPoint;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
};

/// Command line tool for grouping map listings into markers
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct DentmapApp {
    #[command(subcommand)]
    pub op: DentmapOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum DentmapOperation {
    /// cluster a JSON array of listings for one map viewport
    Cluster {
        /// JSON file with an array of {id, location: {lat, lng}, ...} records
        #[arg(long)]
        listings_file: String,
        #[arg(long, allow_negative_numbers = true)]
        center_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        center_lng: f64,
        #[arg(long, default_value_t = 12)]
        zoom: u8,
        /// .toml or .json file with clustering parameters
        #[arg(long)]
        configuration_file: Option<String>,
        /// level of the cluster to drill into
        #[arg(long, requires = "drill_members")]
        drill_level: Option<u32>,
        /// comma-delimited listing ids of the cluster to drill into
        #[arg(long, requires = "drill_level")]
        drill_members: Option<String>,
        /// where to write the clusters, defaults to stdout
        #[arg(long)]
        output_file: Option<String>,
    },
}

impl DentmapOperation {
    pub fn run(&self) -> Result<(), DentmapCliError> {
        match self {
            DentmapOperation::Cluster {
                listings_file,
                center_lat,
                center_lng,
                zoom,
                configuration_file,
                drill_level,
                drill_members,
                output_file,
            } => {
                let conf = match configuration_file {
                    None => ClusterEngineConfig::default(),
                    Some(f) => {
                        log::info!("reading clustering configuration from {f}");
                        ClusterEngineConfig::try_from(f)?
                    }
                };
                let engine = ClusterEngine::new(conf)?;
                let view_state = view_state(*drill_level, drill_members.as_deref())?;
                let viewport = Viewport::new(GeoPoint::new(*center_lat, *center_lng), *zoom);

                log::info!("reading listings from {listings_file}");
                let reader = BufReader::new(File::open(listings_file)?);
                let listings: Vec<ListingRecord> = serde_json::from_reader(reader)?;

                let clusters = engine.compute_clusters(&viewport, &listings, &view_state)?;
                log::info!(
                    "grouped {} listings into {} markers",
                    listings.len(),
                    clusters.len()
                );

                match output_file {
                    Some(f) => {
                        let mut writer = BufWriter::new(File::create(f)?);
                        serde_json::to_writer_pretty(&mut writer, &clusters)?;
                        writer.flush()?;
                        log::info!("wrote clusters to {f}");
                    }
                    None => {
                        let stdout = std::io::stdout();
                        let mut writer = stdout.lock();
                        serde_json::to_writer_pretty(&mut writer, &clusters)?;
                        writeln!(writer)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// builds the drill-down state from the command line selection
fn view_state(
    drill_level: Option<u32>,
    drill_members: Option<&str>,
) -> Result<ViewState, DentmapCliError> {
    match (drill_level, drill_members) {
        (None, None) => Ok(ViewState::TopLevel),
        (Some(0), _) => Err(DentmapCliError::ConfigurationError(String::from(
            "drill level must be at least 1",
        ))),
        (Some(level), Some(members)) => {
            let ids = members
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .collect_vec();
            if ids.is_empty() {
                return Err(DentmapCliError::ConfigurationError(String::from(
                    "drill members list is empty",
                )));
            }
            Ok(ViewState::DrilledInto {
                selected: ClusterId::aggregate(ids, level),
            })
        }
        _ => Err(DentmapCliError::ConfigurationError(String::from(
            "drill level and drill members must be provided together",
        ))),
    }
}
