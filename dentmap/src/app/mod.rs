mod dentmap_app;
mod dentmap_cli_error;

pub use dentmap_app::{DentmapApp, DentmapOperation};
pub use dentmap_cli_error::DentmapCliError;
