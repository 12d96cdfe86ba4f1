//! Inbound mapping from Places API responses to the stable result shapes in
//! [`wayfind_core`].
//!
//! Normalization never fails on missing provider fields: names, addresses and
//! coordinates fall back to fixed placeholders. The only hard requirement is
//! some form of identity (`id` or resource `name`) for search results.

use reqwest::Url;
use wayfind_core::{LatLng, PlaceDetails, PlaceReview, PlaceSearchResult};

use crate::types::{Photo, Place, Review};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_ADDRESS: &str = "Address not available";
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Maximum reviews and photos kept on a detail result.
pub const MAX_REVIEWS: usize = 5;
pub const MAX_PHOTOS: usize = 5;

/// Pixel bound passed to the media endpoint for both dimensions.
pub const PHOTO_MAX_PX: u32 = 400;

/// Turns photo resource names into directly fetchable media URLs.
#[derive(Clone)]
pub struct PhotoUrls {
    media_base: String,
    api_key: String,
}

impl PhotoUrls {
    pub fn new(media_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            media_base: media_base.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        }
    }

    /// Builds `{base}/{photo.name}/media?maxHeightPx=..&maxWidthPx=..&key=..`
    /// with the query values percent-encoded. Returns `None` for nameless
    /// photos or a name that does not form a valid URL.
    #[must_use]
    pub fn media_url(&self, photo: &Photo) -> Option<String> {
        let name = non_empty(photo.name.as_deref())?.trim_start_matches('/');
        let mut url = Url::parse(&format!("{}/{name}/media", self.media_base)).ok()?;
        let max_px = PHOTO_MAX_PX.to_string();
        url.query_pairs_mut()
            .append_pair("maxHeightPx", &max_px)
            .append_pair("maxWidthPx", &max_px)
            .append_pair("key", &self.api_key);
        Some(url.into())
    }
}

impl std::fmt::Debug for PhotoUrls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUrls")
            .field("media_base", &self.media_base)
            .field("api_key", &"[redacted]")
            .finish()
    }
}

/// Resolves a place's identity: the `id` field, else the trailing segment of
/// its resource name (`places/ChIJ...`).
#[must_use]
pub fn place_id(place: &Place) -> Option<String> {
    non_empty(place.id.as_deref())
        .or_else(|| {
            place
                .name
                .as_deref()
                .and_then(|name| non_empty(name.rsplit('/').next()))
        })
        .map(str::to_owned)
}

/// Normalizes one search hit. Returns `None` only when the place carries no
/// identity at all.
#[must_use]
pub fn normalize_place(place: &Place) -> Option<PlaceSearchResult> {
    let id = place_id(place)?;
    Some(summary(place, id))
}

/// Normalizes a detail response. `requested_id` backs up the identity when
/// the provider omits both `id` and `name`.
#[must_use]
pub fn normalize_place_details(
    place: &Place,
    requested_id: &str,
    photos: &PhotoUrls,
) -> PlaceDetails {
    let id = place_id(place).unwrap_or_else(|| requested_id.to_owned());

    let phone_number = place
        .national_phone_number
        .clone()
        .or_else(|| place.international_phone_number.clone());

    // Regular hours describe the usual week; current hours only cover the
    // next seven days and may include special closures.
    let opening_hours = place
        .regular_opening_hours
        .as_ref()
        .or(place.current_opening_hours.as_ref())
        .map(|hours| hours.weekday_descriptions.clone())
        .filter(|days| !days.is_empty());

    let reviews = place
        .reviews
        .iter()
        .take(MAX_REVIEWS)
        .map(normalize_review)
        .collect();

    let photo_urls = place
        .photos
        .iter()
        .filter_map(|photo| photos.media_url(photo))
        .take(MAX_PHOTOS)
        .collect();

    PlaceDetails {
        summary: summary(place, id),
        phone_number,
        website: place.website_uri.clone(),
        opening_hours,
        reviews: Some(reviews),
        photos: Some(photo_urls),
    }
}

fn summary(place: &Place, id: String) -> PlaceSearchResult {
    let name = place
        .display_name
        .as_ref()
        .and_then(|d| non_empty(d.text.as_deref()))
        .unwrap_or(UNKNOWN_NAME)
        .to_owned();

    let address = non_empty(place.formatted_address.as_deref())
        .unwrap_or(UNKNOWN_ADDRESS)
        .to_owned();

    let location = place.location.map_or(LatLng::ORIGIN, |loc| LatLng {
        lat: loc.latitude,
        lng: loc.longitude,
    });

    PlaceSearchResult {
        id,
        name,
        address,
        location,
        rating: place.rating,
        price_level: place.price_level.as_ref().and_then(|p| p.as_level()),
        types: place.types.clone(),
        is_open: place.current_opening_hours.as_ref().and_then(|h| h.open_now),
    }
}

fn normalize_review(review: &Review) -> PlaceReview {
    let text = review
        .text
        .as_ref()
        .or(review.original_text.as_ref())
        .and_then(|t| t.text.clone())
        .unwrap_or_default();

    let author = review
        .author_attribution
        .as_ref()
        .and_then(|a| non_empty(a.display_name.as_deref()))
        .unwrap_or(ANONYMOUS_AUTHOR)
        .to_owned();

    PlaceReview {
        rating: review.rating,
        text,
        author,
        time: review
            .relative_publish_time_description
            .clone()
            .or_else(|| review.publish_time.clone()),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
