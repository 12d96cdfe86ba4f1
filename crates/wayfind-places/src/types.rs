//! Google Places API (v1) request and response types.
//!
//! Only the fields named in the request field masks are modelled. Every
//! response field is optional on the wire; absence is preserved here and
//! resolved into defaults by [`crate::normalize`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body for `POST places:searchText`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest {
    pub text_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_bias: Option<LocationArea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_type: Option<String>,
    pub max_result_count: u32,
}

/// Body for `POST places:searchNearby`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNearbyRequest {
    pub included_types: Vec<String>,
    pub max_result_count: u32,
    pub location_restriction: LocationArea,
}

/// A location bias or restriction. The API also accepts rectangles; only
/// circles are produced here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationArea {
    pub circle: Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub center: LatLngLiteral,
    /// Meters.
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLngLiteral {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Envelope for both search endpoints. An empty result omits `places`.
#[derive(Debug, Default, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: Option<String>,
    /// Resource name, `places/{id}`.
    pub name: Option<String>,
    pub display_name: Option<LocalizedText>,
    pub formatted_address: Option<String>,
    pub location: Option<LatLngLiteral>,
    pub rating: Option<f64>,
    pub price_level: Option<PriceLevel>,
    #[serde(default)]
    pub types: Vec<String>,
    pub current_opening_hours: Option<OpeningHours>,
    pub regular_opening_hours: Option<OpeningHours>,
    pub national_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website_uri: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: Option<String>,
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: Option<f64>,
    pub text: Option<LocalizedText>,
    pub original_text: Option<LocalizedText>,
    pub author_attribution: Option<AuthorAttribution>,
    pub relative_publish_time_description: Option<String>,
    pub publish_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAttribution {
    pub display_name: Option<String>,
    pub uri: Option<String>,
    pub photo_uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Resource name, `places/{place_id}/photos/{photo_reference}`.
    pub name: Option<String>,
    pub width_px: Option<u32>,
    pub height_px: Option<u32>,
}

/// Price level as sent by the API.
///
/// The v1 API uses enum strings (`PRICE_LEVEL_MODERATE`); some proxies and
/// older payloads send the bare 0-4 integer instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceLevel {
    Numeric(u8),
    Named(String),
    /// Anything else (negative or fractional numbers, objects). Maps to no level.
    Other(serde_json::Value),
}

impl PriceLevel {
    /// Maps the level onto the 0-4 scale. Unspecified or unknown values yield `None`.
    #[must_use]
    pub fn as_level(&self) -> Option<u8> {
        match self {
            Self::Numeric(n) if *n <= 4 => Some(*n),
            Self::Numeric(_) => None,
            Self::Named(name) => match name.as_str() {
                "PRICE_LEVEL_FREE" => Some(0),
                "PRICE_LEVEL_INEXPENSIVE" => Some(1),
                "PRICE_LEVEL_MODERATE" => Some(2),
                "PRICE_LEVEL_EXPENSIVE" => Some(3),
                "PRICE_LEVEL_VERY_EXPENSIVE" => Some(4),
                _ => None,
            },
            Self::Other(_) => None,
        }
    }
}

/// Error body returned with non-2xx responses:
/// `{"error": {"code": 429, "message": "...", "status": "RESOURCE_EXHAUSTED"}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub status: Option<String>,
}
