use async_trait::async_trait;

use crate::error::PlacesError;
use crate::types::{Place, SearchNearbyRequest, SearchTextRequest};

/// The three provider capabilities the adapter consumes.
///
/// [`crate::GooglePlacesClient`] is the production implementation; tests
/// substitute in-memory fakes.
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn search_text(&self, request: &SearchTextRequest) -> Result<Vec<Place>, PlacesError>;

    async fn search_nearby(
        &self,
        request: &SearchNearbyRequest,
    ) -> Result<Vec<Place>, PlacesError>;

    async fn get_place(&self, place_id: &str, field_mask: &str) -> Result<Place, PlacesError>;
}
