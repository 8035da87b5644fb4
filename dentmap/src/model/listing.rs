use dentmap_core::util::GeoPoint;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// a geo-located record that can be placed on the map. everything beyond the
/// identifier and the location is payload the clustering engine never reads.
///
/// identifiers must be unique within one clustering call.
pub trait Listing {
    fn listing_id(&self) -> &str;
    fn location(&self) -> GeoPoint;
}

/// listing as delivered by the search layer, with all business fields
/// (name, rating, photos, hours...) kept verbatim in `payload`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub location: GeoPoint,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ListingRecord {
    pub fn new(id: &str, lat: f64, lng: f64) -> ListingRecord {
        ListingRecord {
            id: id.to_string(),
            location: GeoPoint::new(lat, lng),
            payload: Map::new(),
        }
    }
}

impl Listing for ListingRecord {
    fn listing_id(&self) -> &str {
        &self.id
    }

    fn location(&self) -> GeoPoint {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_passthrough() {
        let input = serde_json::json!({
            "id": "ChIJ-dental-1",
            "location": { "lat": 40.7608, "lng": -111.891 },
            "name": "Wasatch Family Dental",
            "rating": 4.8,
            "isClaimed": false
        });
        let record: ListingRecord = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(record.listing_id(), "ChIJ-dental-1");
        assert_eq!(record.location(), GeoPoint::new(40.7608, -111.891));
        assert_eq!(record.payload.len(), 3);

        let output = serde_json::to_value(&record).unwrap();
        assert_eq!(output, input);
    }
}
