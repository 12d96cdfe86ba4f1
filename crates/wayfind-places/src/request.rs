//! Outbound mapping from validated search parameters to Places API requests.

use wayfind_core::{LatLng, NearbyParams, SearchParams, DEFAULT_RADIUS_METERS};

use crate::types::{Circle, LatLngLiteral, LocationArea, SearchNearbyRequest, SearchTextRequest};

/// Ceiling on results requested from either search endpoint.
pub const MAX_RESULT_COUNT: u32 = 10;

/// Field mask for `places:searchText` and `places:searchNearby`.
pub const SEARCH_FIELD_MASK: &str = "places.id,places.name,places.displayName,\
places.formattedAddress,places.location,places.rating,places.priceLevel,\
places.types,places.currentOpeningHours";

/// Field mask for `GET places/{id}`.
///
/// Listed exhaustively so newly added provider fields never change the
/// response shape.
pub const DETAILS_FIELD_MASK: &str = "id,name,displayName,formattedAddress,location,\
rating,priceLevel,types,currentOpeningHours,regularOpeningHours,nationalPhoneNumber,\
internationalPhoneNumber,websiteUri,reviews,photos";

/// Builds a text search request. A location bias is attached only when the
/// caller supplied a location.
#[must_use]
pub fn text_search_request(params: &SearchParams) -> SearchTextRequest {
    SearchTextRequest {
        text_query: params.query.clone(),
        location_bias: params.location.map(|center| {
            circle_area(center, params.radius.unwrap_or(DEFAULT_RADIUS_METERS))
        }),
        included_type: params.place_type.clone(),
        max_result_count: MAX_RESULT_COUNT,
    }
}

#[must_use]
pub fn nearby_request(params: &NearbyParams) -> SearchNearbyRequest {
    SearchNearbyRequest {
        included_types: vec![params.place_type.clone()],
        max_result_count: MAX_RESULT_COUNT,
        location_restriction: circle_area(params.location, params.radius),
    }
}

fn circle_area(center: LatLng, radius: f64) -> LocationArea {
    LocationArea {
        circle: Circle {
            center: LatLngLiteral {
                latitude: center.lat,
                longitude: center.lng,
            },
            radius,
        },
    }
}
