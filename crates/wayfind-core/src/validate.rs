//! Input validation for raw JSON request bodies and tool arguments.
//!
//! Each validator parses the raw value into typed parameters or returns a
//! [`ValidationError`] naming the first offending field. JSON `null` is
//! treated the same as an absent optional field.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::places::{LatLng, NearbyParams, SearchParams, DEFAULT_RADIUS_METERS, MAX_RADIUS_METERS};

/// Validates a text search request: `{query, location?, radius?, type?}`.
///
/// # Errors
///
/// Returns [`ValidationError`] when `query` is missing or blank, or any
/// optional field is present but malformed.
pub fn validate_search(input: &Value) -> Result<SearchParams, ValidationError> {
    let body = as_object(input)?;

    let query = match present(body, "query") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_owned(),
        Some(Value::String(_)) => {
            return Err(ValidationError::new("query", "query must not be empty"))
        }
        Some(_) => return Err(ValidationError::new("query", "query must be a string")),
        None => return Err(ValidationError::new("query", "query is required")),
    };

    let location = present(body, "location").map(parse_location).transpose()?;
    let radius = present(body, "radius").map(parse_radius).transpose()?;
    let place_type = present(body, "type").map(parse_type).transpose()?;

    Ok(SearchParams {
        query,
        location,
        radius,
        place_type,
    })
}

/// Validates a nearby search request: `{location, type, radius?}`.
///
/// Radius defaults to [`DEFAULT_RADIUS_METERS`].
///
/// # Errors
///
/// Returns [`ValidationError`] when `location` or `type` is missing, or any
/// field is malformed.
pub fn validate_nearby(input: &Value) -> Result<NearbyParams, ValidationError> {
    let body = as_object(input)?;

    let location = present(body, "location")
        .ok_or_else(|| ValidationError::new("location", "location is required"))
        .and_then(parse_location)?;
    let place_type = present(body, "type")
        .ok_or_else(|| ValidationError::new("type", "type is required"))
        .and_then(parse_type)?;
    let radius = present(body, "radius")
        .map(parse_radius)
        .transpose()?
        .unwrap_or(DEFAULT_RADIUS_METERS);

    Ok(NearbyParams {
        location,
        place_type,
        radius,
    })
}

/// Validates an opaque provider place id taken from a path or tool argument.
///
/// # Errors
///
/// Returns [`ValidationError`] when the id is blank.
pub fn validate_place_id(place_id: &str) -> Result<String, ValidationError> {
    let trimmed = place_id.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("placeId", "placeId is required"));
    }
    Ok(trimmed.to_owned())
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationError> {
    input
        .as_object()
        .ok_or_else(|| ValidationError::new("body", "request body must be a JSON object"))
}

fn present<'a>(body: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|v| !v.is_null())
}

fn parse_location(value: &Value) -> Result<LatLng, ValidationError> {
    let obj = value.as_object().ok_or_else(|| {
        ValidationError::new("location", "location must be an object with lat and lng")
    })?;

    let lat = coordinate(obj, "lat")?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ValidationError::new(
            "location.lat",
            "latitude must be between -90 and 90",
        ));
    }

    let lng = coordinate(obj, "lng")?;
    if !(-180.0..=180.0).contains(&lng) {
        return Err(ValidationError::new(
            "location.lng",
            "longitude must be between -180 and 180",
        ));
    }

    Ok(LatLng { lat, lng })
}

fn coordinate(obj: &Map<String, Value>, key: &str) -> Result<f64, ValidationError> {
    let field = format!("location.{key}");
    match present(obj, key) {
        Some(v) => v
            .as_f64()
            .ok_or_else(|| ValidationError::new(&field, format!("{field} must be a number"))),
        None => Err(ValidationError::new(&field, format!("{field} is required"))),
    }
}

fn parse_radius(value: &Value) -> Result<f64, ValidationError> {
    let radius = value
        .as_f64()
        .ok_or_else(|| ValidationError::new("radius", "radius must be a number"))?;
    if radius <= 0.0 || radius > MAX_RADIUS_METERS {
        return Err(ValidationError::new(
            "radius",
            "radius must be greater than 0 and at most 50000 meters",
        ));
    }
    Ok(radius)
}

fn parse_type(value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_owned()),
        Value::String(_) => Err(ValidationError::new("type", "type must not be empty")),
        _ => Err(ValidationError::new("type", "type must be a string")),
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
