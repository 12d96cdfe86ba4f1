use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde_json::Value;
use wayfind_core::{
    validate_nearby, validate_place_id, validate_search, PlaceDetails, PlaceSearchResult,
};

use crate::middleware::RequestId;

use super::{map_service_error, ApiError, ApiResponse, AppState};

pub(super) async fn search_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<PlaceSearchResult>>>, ApiError> {
    let Json(body) = body?;
    let params = validate_search(&body)?;

    let results = state
        .places
        .search_places(&params)
        .await
        .map_err(|e| map_service_error(&req_id.0, &e, state.expose_error_details))?;

    let count = results.len();
    tracing::info!(request_id = %req_id.0, query = %params.query, count, "search served");
    Ok(Json(
        ApiResponse::ok(results, format!("Found {count} places")).with_count(count),
    ))
}

pub(super) async fn find_nearby_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<PlaceSearchResult>>>, ApiError> {
    let Json(body) = body?;
    let params = validate_nearby(&body)?;

    let results = state
        .places
        .find_nearby_places(&params)
        .await
        .map_err(|e| map_service_error(&req_id.0, &e, state.expose_error_details))?;

    let count = results.len();
    tracing::info!(
        request_id = %req_id.0,
        place_type = %params.place_type,
        count,
        "nearby search served"
    );
    Ok(Json(
        ApiResponse::ok(results, format!("Found {count} nearby places")).with_count(count),
    ))
}

pub(super) async fn get_place_details(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(place_id): Path<String>,
) -> Result<Json<ApiResponse<PlaceDetails>>, ApiError> {
    let place_id = validate_place_id(&place_id)?;

    let details = state
        .places
        .get_place_details(&place_id)
        .await
        .map_err(|e| map_service_error(&req_id.0, &e, state.expose_error_details))?;

    Ok(Json(ApiResponse::ok(
        details,
        "Place details retrieved successfully",
    )))
}

pub(super) async fn list_place_types(
    State(state): State<AppState>,
) -> Json<ApiResponse<&'static [&'static str]>> {
    Json(ApiResponse::ok(
        state.places.place_types(),
        "Available place types retrieved successfully",
    ))
}
