mod places;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use wayfind_core::ValidationError;
use wayfind_places::{FailureSignal, PlacesService, ServiceError};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

pub const SERVICE_NAME: &str = "wayfind";

#[derive(Clone)]
pub struct AppState {
    pub places: PlacesService,
    /// Attach raw provider error text to 500 responses. Off in production.
    pub expose_error_details: bool,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message: message.into(),
        }
    }

    pub(super) fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub code: &'static str,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    timestamp: DateTime<Utc>,
    service: &'static str,
}

impl ApiError {
    pub fn new(code: &'static str, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            error: error.into(),
            message: message.into(),
            field: None,
            details: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.code {
            "VALIDATION_ERROR" => StatusCode::BAD_REQUEST,
            "INVALID_API_KEY" => StatusCode::UNAUTHORIZED,
            "NOT_FOUND" | "PLACE_NOT_FOUND" => StatusCode::NOT_FOUND,
            "QUOTA_EXCEEDED" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let mut api = ApiError::new("VALIDATION_ERROR", "Validation failed", err.message);
        api.field = Some(err.field);
        api
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let mut api = ApiError::new(
            "VALIDATION_ERROR",
            "Validation failed",
            rejection.body_text(),
        );
        api.field = Some("body".to_owned());
        api
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Translates an adapter failure into a client-facing error.
///
/// The adapter has already logged the full provider context; this adds the
/// request id and the chosen code.
pub(super) fn map_service_error(
    request_id: &str,
    err: &ServiceError,
    expose_details: bool,
) -> ApiError {
    let api = match err.signal() {
        FailureSignal::Quota => ApiError::new(
            "QUOTA_EXCEEDED",
            "API quota exceeded",
            "The places provider quota has been exceeded. Please try again later.",
        ),
        FailureSignal::Auth => ApiError::new(
            "INVALID_API_KEY",
            "Invalid API key",
            "The places provider rejected the configured API key.",
        ),
        FailureSignal::NotFound => ApiError::new(
            "PLACE_NOT_FOUND",
            "Place not found",
            "No place exists with the given id.",
        ),
        FailureSignal::Other => {
            let mut api = ApiError::new(
                "INTERNAL_ERROR",
                "Internal server error",
                "Something went wrong while contacting the places provider.",
            );
            if expose_details {
                api.details = Some(error_chain(err));
            }
            api
        }
    };
    tracing::warn!(request_id, code = api.code, error = %err, "request failed");
    api
}

/// Joins an error and its sources: `failed to x: provider said y`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/places/search", post(places::search_places))
        .route("/api/places/nearby", post(places::find_nearby_places))
        .route("/api/places/types", get(places::list_place_types))
        .route("/api/places/{place_id}", get(places::get_place_details))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData {
        status: "OK",
        timestamp: Utc::now(),
        service: SERVICE_NAME,
    })
}

async fn not_found() -> ApiError {
    ApiError::new(
        "NOT_FOUND",
        "Endpoint not found",
        "The requested endpoint does not exist.",
    )
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
