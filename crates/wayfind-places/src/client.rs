//! HTTP client for the Google Places API (v1).
//!
//! Wraps `reqwest` with credential and field-mask headers and typed response
//! deserialization. Non-2xx responses are decoded from Google's error
//! envelope and surfaced as [`PlacesError::Api`] so callers can classify them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::provider::PlacesProvider;
use crate::request::SEARCH_FIELD_MASK;
use crate::types::{
    ApiErrorEnvelope, Place, PlacesResponse, SearchNearbyRequest, SearchTextRequest,
};

pub const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/v1";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Client for the Google Places REST API.
///
/// Use [`GooglePlacesClient::new`] for production or
/// [`GooglePlacesClient::with_base_url`] to point at a mock server in tests.
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl GooglePlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`PlacesError::InvalidBaseUrl`] if `base_url` does not parse as a
    /// hierarchical URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("wayfind/0.1 (places-search)")
            .build()?;

        let invalid = |reason: String| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let parsed =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_owned()));
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    ///
    /// `Url::join` would read `places:searchText` as a URL with scheme `places`.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, request: RequestBuilder, field_mask: &str) -> RequestBuilder {
        request
            .header(API_KEY_HEADER, &self.api_key)
            .header(FIELD_MASK_HEADER, field_mask)
    }

    /// Sends the request and decodes either the typed body or the API error
    /// envelope.
    async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let envelope = serde_json::from_str::<ApiErrorEnvelope>(&body).ok();
            let (code, message) = envelope.map_or_else(
                || {
                    let fallback = status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_owned();
                    (None, fallback)
                },
                |e| {
                    let message = e.error.message.unwrap_or_else(|| status.to_string());
                    (e.error.status, message)
                },
            );
            return Err(PlacesError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
    async fn search_text(&self, request: &SearchTextRequest) -> Result<Vec<Place>, PlacesError> {
        let url = self.endpoint(&["places:searchText"]);
        let builder = self.authorized(self.client.post(url), SEARCH_FIELD_MASK).json(request);
        let response: PlacesResponse = Self::send_json(
            builder,
            &format!("searchText(query={})", request.text_query),
        )
        .await?;
        Ok(response.places)
    }

    async fn search_nearby(
        &self,
        request: &SearchNearbyRequest,
    ) -> Result<Vec<Place>, PlacesError> {
        let url = self.endpoint(&["places:searchNearby"]);
        let builder = self.authorized(self.client.post(url), SEARCH_FIELD_MASK).json(request);
        let response: PlacesResponse = Self::send_json(
            builder,
            &format!("searchNearby(types={:?})", request.included_types),
        )
        .await?;
        Ok(response.places)
    }

    async fn get_place(&self, place_id: &str, field_mask: &str) -> Result<Place, PlacesError> {
        let url = self.endpoint(&["places", place_id]);
        let builder = self.authorized(self.client.get(url), field_mask);
        Self::send_json(builder, &format!("getPlace(id={place_id})")).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
