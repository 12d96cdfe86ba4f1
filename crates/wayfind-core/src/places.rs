//! Request parameters and normalized place results.
//!
//! These are the stable shapes both transport surfaces serialize. Provider
//! wire types live in `wayfind-places` and never leak past the adapter.

use serde::{Deserialize, Serialize};

/// Radius applied to location circles when the caller omits one, in meters.
pub const DEFAULT_RADIUS_METERS: f64 = 5000.0;

/// Upper bound accepted for any search radius, in meters.
pub const MAX_RADIUS_METERS: f64 = 50_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Fallback coordinate for places the provider returns without a location.
    pub const ORIGIN: LatLng = LatLng { lat: 0.0, lng: 0.0 };
}

/// Validated free-text search input.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub query: String,
    pub location: Option<LatLng>,
    pub radius: Option<f64>,
    pub place_type: Option<String>,
}

/// Validated nearby search input.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyParams {
    pub location: LatLng,
    pub place_type: String,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSearchResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceReview {
    pub rating: Option<f64>,
    pub text: String,
    pub author: String,
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    #[serde(flatten)]
    pub summary: PlaceSearchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<PlaceReview>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_serializes_camel_case_and_omits_absent_fields() {
        let result = PlaceSearchResult {
            id: "abc".to_string(),
            name: "Joe's Pizza".to_string(),
            address: "7 Carmine St".to_string(),
            location: LatLng {
                lat: 40.73,
                lng: -74.0,
            },
            rating: None,
            price_level: Some(1),
            types: vec!["restaurant".to_string()],
            is_open: None,
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["priceLevel"], 1);
        assert!(json.get("rating").is_none());
        assert!(json.get("isOpen").is_none());
        assert_eq!(json["location"]["lng"], -74.0);
    }

    #[test]
    fn details_flatten_summary_fields() {
        let details = PlaceDetails {
            summary: PlaceSearchResult {
                id: "abc".to_string(),
                name: "Cafe".to_string(),
                address: "Main St".to_string(),
                location: LatLng::ORIGIN,
                rating: Some(4.5),
                price_level: None,
                types: vec![],
                is_open: Some(false),
            },
            phone_number: Some("555-0100".to_string()),
            website: None,
            opening_hours: None,
            reviews: Some(vec![]),
            photos: None,
        };
        let json = serde_json::to_value(&details).expect("serialize");
        assert_eq!(json["id"], "abc");
        assert_eq!(json["isOpen"], false);
        assert_eq!(json["phoneNumber"], "555-0100");
        assert!(json.get("summary").is_none());
        assert!(json.get("website").is_none());
        assert!(json["reviews"].as_array().is_some_and(Vec::is_empty));
    }
}
