use geo::{Coord, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a WGS84 position as reported by a web map, in decimal degrees.
///
/// equality is exact coordinate equality, no tolerance is applied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint { lat, lng }
    }

    /// true when both ordinates are finite and within WGS84 range
    /// (latitude in [-90, 90], longitude in [-180, 180]).
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(value: GeoPoint) -> Self {
        Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(value: GeoPoint) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(value: Coord<f64>) -> Self {
        GeoPoint::new(value.y, value.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(GeoPoint::new(40.0, -111.0).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, -111.0).is_valid());
        assert!(!GeoPoint::new(40.0, f64::INFINITY).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.01).is_valid());
    }

    #[test]
    fn test_coord_orientation() {
        let p = GeoPoint::new(39.7392, -104.9903);
        let coord: Coord<f64> = p.into();
        assert_eq!(coord.x, -104.9903);
        assert_eq!(coord.y, 39.7392);
        assert_eq!(GeoPoint::from(coord), p);
    }

    #[test]
    fn test_deserialize() {
        let p: GeoPoint = serde_json::from_str(r#"{"lat": 40.5, "lng": -111.5}"#).unwrap();
        assert_eq!(p, GeoPoint::new(40.5, -111.5));
    }
}
