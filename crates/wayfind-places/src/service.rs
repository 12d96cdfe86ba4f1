//! The adapter both transport surfaces call.
//!
//! [`PlacesService`] shapes outbound requests, calls the provider once, and
//! normalizes the response. Provider failures are logged here with the
//! request context and re-raised as a single [`ServiceError`]; mapping that
//! error to a client-facing code is the caller's job.

use std::sync::Arc;

use thiserror::Error;
use wayfind_core::{
    AppConfig, NearbyParams, PlaceDetails, PlaceSearchResult, SearchParams, PLACE_TYPES,
};

use crate::client::GooglePlacesClient;
use crate::error::{FailureSignal, PlacesError};
use crate::normalize::{normalize_place, normalize_place_details, PhotoUrls};
use crate::provider::PlacesProvider;
use crate::request::{nearby_request, text_search_request, DETAILS_FIELD_MASK};
use crate::types::Place;

/// A failed adapter operation.
///
/// `Display` names only the operation; the provider error stays reachable
/// through `source()` for logs and non-production diagnostics.
#[derive(Debug, Error)]
#[error("failed to {operation}")]
pub struct ServiceError {
    pub operation: &'static str,
    #[source]
    pub source: PlacesError,
}

impl ServiceError {
    #[must_use]
    pub fn signal(&self) -> FailureSignal {
        self.source.signal()
    }
}

#[derive(Clone)]
pub struct PlacesService {
    provider: Arc<dyn PlacesProvider>,
    photos: PhotoUrls,
}

impl PlacesService {
    pub fn new(provider: Arc<dyn PlacesProvider>, photos: PhotoUrls) -> Self {
        Self { provider, photos }
    }

    /// Builds the production service: a [`GooglePlacesClient`] plus photo URLs
    /// rooted at the same base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError`] if the HTTP client cannot be constructed or
    /// the configured base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, PlacesError> {
        let client = GooglePlacesClient::with_base_url(
            &config.google_maps_api_key,
            config.request_timeout_secs,
            &config.places_base_url,
        )?;
        let photos = PhotoUrls::new(&config.places_base_url, &config.google_maps_api_key);
        Ok(Self::new(Arc::new(client), photos))
    }

    /// Free-text search, at most ten results.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the provider call fails.
    pub async fn search_places(
        &self,
        params: &SearchParams,
    ) -> Result<Vec<PlaceSearchResult>, ServiceError> {
        let request = text_search_request(params);
        let places = self.provider.search_text(&request).await.map_err(|e| {
            tracing::error!(
                operation = "search_places",
                query = %params.query,
                location = ?params.location,
                radius = ?params.radius,
                place_type = ?params.place_type,
                error = %e,
                "places provider call failed"
            );
            ServiceError {
                operation: "search places",
                source: e,
            }
        })?;

        let results = normalize_all(&places);
        tracing::debug!(query = %params.query, count = results.len(), "text search complete");
        Ok(results)
    }

    /// Nearby search restricted to a circle and a single place type.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the provider call fails.
    pub async fn find_nearby_places(
        &self,
        params: &NearbyParams,
    ) -> Result<Vec<PlaceSearchResult>, ServiceError> {
        let request = nearby_request(params);
        let places = self.provider.search_nearby(&request).await.map_err(|e| {
            tracing::error!(
                operation = "find_nearby_places",
                location = ?params.location,
                radius = params.radius,
                place_type = %params.place_type,
                error = %e,
                "places provider call failed"
            );
            ServiceError {
                operation: "find nearby places",
                source: e,
            }
        })?;

        let results = normalize_all(&places);
        tracing::debug!(
            place_type = %params.place_type,
            count = results.len(),
            "nearby search complete"
        );
        Ok(results)
    }

    /// Full details for one place, with reviews and photos capped at five.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the provider call fails.
    pub async fn get_place_details(&self, place_id: &str) -> Result<PlaceDetails, ServiceError> {
        let place = self
            .provider
            .get_place(place_id, DETAILS_FIELD_MASK)
            .await
            .map_err(|e| {
                tracing::error!(
                    operation = "get_place_details",
                    place_id,
                    error = %e,
                    "places provider call failed"
                );
                ServiceError {
                    operation: "get place details",
                    source: e,
                }
            })?;

        Ok(normalize_place_details(&place, place_id, &self.photos))
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn place_types(&self) -> &'static [&'static str] {
        &PLACE_TYPES
    }
}

fn normalize_all(places: &[Place]) -> Vec<PlaceSearchResult> {
    let results: Vec<PlaceSearchResult> = places.iter().filter_map(normalize_place).collect();
    let skipped = places.len() - results.len();
    if skipped > 0 {
        tracing::warn!(skipped, "dropped provider places without an id");
    }
    results
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use wayfind_core::LatLng;

    use super::*;
    use crate::types::{LocalizedText, SearchNearbyRequest, SearchTextRequest};

    /// Records requests and replays a fixed outcome.
    #[derive(Default)]
    struct RecordingProvider {
        places: Vec<Place>,
        fail_with: Option<(u16, &'static str)>,
        text_requests: Mutex<Vec<SearchTextRequest>>,
        nearby_requests: Mutex<Vec<SearchNearbyRequest>>,
        detail_requests: Mutex<Vec<(String, String)>>,
    }

    impl RecordingProvider {
        fn outcome(&self) -> Result<Vec<Place>, PlacesError> {
            match self.fail_with {
                Some((status, message)) => Err(PlacesError::Api {
                    status,
                    code: None,
                    message: message.to_owned(),
                }),
                None => Ok(self.places.clone()),
            }
        }
    }

    #[async_trait]
    impl PlacesProvider for RecordingProvider {
        async fn search_text(
            &self,
            request: &SearchTextRequest,
        ) -> Result<Vec<Place>, PlacesError> {
            self.text_requests.lock().unwrap().push(request.clone());
            self.outcome()
        }

        async fn search_nearby(
            &self,
            request: &SearchNearbyRequest,
        ) -> Result<Vec<Place>, PlacesError> {
            self.nearby_requests.lock().unwrap().push(request.clone());
            self.outcome()
        }

        async fn get_place(&self, place_id: &str, field_mask: &str) -> Result<Place, PlacesError> {
            self.detail_requests
                .lock()
                .unwrap()
                .push((place_id.to_owned(), field_mask.to_owned()));
            self.outcome()
                .map(|places| places.into_iter().next().unwrap_or_default())
        }
    }

    fn named_place(id: &str, name: &str) -> Place {
        Place {
            id: Some(id.to_owned()),
            display_name: Some(LocalizedText {
                text: Some(name.to_owned()),
                language_code: None,
            }),
            ..Place::default()
        }
    }

    fn service(provider: &Arc<RecordingProvider>) -> PlacesService {
        let dyn_provider: Arc<dyn PlacesProvider> = provider.clone();
        PlacesService::new(dyn_provider, PhotoUrls::new("https://media.test/v1", "k"))
    }

    #[tokio::test]
    async fn search_places_normalizes_and_drops_anonymous_places() {
        let provider = Arc::new(RecordingProvider {
            places: vec![
                named_place("a", "Alpha"),
                Place::default(),
                named_place("b", "Beta"),
            ],
            ..RecordingProvider::default()
        });
        let params = SearchParams {
            query: "pizza".to_owned(),
            location: None,
            radius: None,
            place_type: None,
        };

        let results = service(&provider).search_places(&params).await.unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);
        let sent = provider.text_requests.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].location_bias.is_none());
    }

    #[tokio::test]
    async fn nearby_sends_restriction_circle() {
        let provider = Arc::new(RecordingProvider::default());
        let params = NearbyParams {
            location: LatLng { lat: 10.0, lng: 20.0 },
            place_type: "park".to_owned(),
            radius: 5000.0,
        };

        let results = service(&provider).find_nearby_places(&params).await.unwrap();

        assert!(results.is_empty());
        let sent = provider.nearby_requests.lock().unwrap();
        assert_eq!(sent[0].included_types, vec!["park".to_owned()]);
        assert!((sent[0].location_restriction.circle.radius - 5000.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn details_request_full_field_mask() {
        let provider = Arc::new(RecordingProvider {
            places: vec![named_place("abc", "Gamma")],
            ..RecordingProvider::default()
        });

        let details = service(&provider).get_place_details("abc").await.unwrap();

        assert_eq!(details.summary.name, "Gamma");
        let sent = provider.detail_requests.lock().unwrap();
        assert_eq!(sent[0], ("abc".to_owned(), DETAILS_FIELD_MASK.to_owned()));
    }

    #[tokio::test]
    async fn provider_failure_becomes_service_error_with_signal() {
        let provider = Arc::new(RecordingProvider {
            fail_with: Some((429, "Quota exceeded for quota metric")),
            ..RecordingProvider::default()
        });
        let params = SearchParams {
            query: "pizza".to_owned(),
            location: None,
            radius: None,
            place_type: None,
        };

        let err = service(&provider).search_places(&params).await.unwrap_err();

        assert_eq!(err.operation, "search places");
        assert_eq!(err.signal(), FailureSignal::Quota);
        assert_eq!(err.to_string(), "failed to search places");
        let source = std::error::Error::source(&err).expect("provider error kept as source");
        assert!(source.to_string().contains("Quota exceeded"));
    }

    #[test]
    fn place_types_are_exposed() {
        let provider = Arc::new(RecordingProvider::default());
        assert_eq!(service(&provider).place_types().len(), 29);
    }
}
