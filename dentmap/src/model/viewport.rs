use dentmap_core::util::GeoPoint;
use serde::{Deserialize, Serialize};

/// the current state of the map as seen by the user. zoom follows the usual
/// web-map convention where 0 shows the whole world and each step doubles
/// the scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: u8) -> Viewport {
        Viewport { center, zoom }
    }
}
