//! Google Places client and the normalization adapter in front of it.

pub mod client;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod request;
pub mod service;
pub mod types;

pub use client::GooglePlacesClient;
pub use error::{FailureSignal, PlacesError};
pub use normalize::{normalize_place, normalize_place_details, PhotoUrls};
pub use provider::PlacesProvider;
pub use request::{nearby_request, text_search_request, DETAILS_FIELD_MASK, SEARCH_FIELD_MASK};
pub use service::{PlacesService, ServiceError};
