pub mod geo_point;
pub mod geo_utils;

pub use geo_point::GeoPoint;
