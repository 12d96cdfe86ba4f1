//! Shared domain types, request validation, and configuration for wayfind.

pub mod app_config;
pub mod config;
pub mod error;
pub mod place_types;
pub mod places;
pub mod validate;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ValidationError};
pub use place_types::PLACE_TYPES;
pub use places::{
    LatLng, NearbyParams, PlaceDetails, PlaceReview, PlaceSearchResult, SearchParams,
    DEFAULT_RADIUS_METERS, MAX_RADIUS_METERS,
};
pub use validate::{validate_nearby, validate_place_id, validate_search};
