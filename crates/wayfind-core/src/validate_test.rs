use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// validate_search
// -----------------------------------------------------------------------

#[test]
fn search_accepts_query_only() {
    let params = validate_search(&json!({"query": "  pizza  "})).expect("valid");
    assert_eq!(params.query, "pizza");
    assert!(params.location.is_none());
    assert!(params.radius.is_none());
    assert!(params.place_type.is_none());
}

#[test]
fn search_accepts_all_fields() {
    let params = validate_search(&json!({
        "query": "coffee",
        "location": {"lat": 47.6, "lng": -122.3},
        "radius": 1200,
        "type": "cafe"
    }))
    .expect("valid");
    assert_eq!(
        params.location,
        Some(LatLng {
            lat: 47.6,
            lng: -122.3
        })
    );
    assert_eq!(params.radius, Some(1200.0));
    assert_eq!(params.place_type.as_deref(), Some("cafe"));
}

#[test]
fn search_rejects_missing_blank_and_non_string_query() {
    for body in [json!({}), json!({"query": "   "}), json!({"query": 42})] {
        let err = validate_search(&body).unwrap_err();
        assert_eq!(err.field, "query", "body: {body}");
    }
}

#[test]
fn search_treats_null_optionals_as_absent() {
    let params = validate_search(&json!({
        "query": "tacos",
        "location": null,
        "radius": null,
        "type": null
    }))
    .expect("valid");
    assert!(params.location.is_none());
    assert!(params.radius.is_none());
}

#[test]
fn search_rejects_radius_out_of_bounds() {
    for radius in [json!(0), json!(-5), json!(50_001), json!("wide")] {
        let err = validate_search(&json!({"query": "x", "radius": radius})).unwrap_err();
        assert_eq!(err.field, "radius");
    }
    assert!(validate_search(&json!({"query": "x", "radius": 50_000})).is_ok());
}

#[test]
fn search_rejects_blank_type() {
    let err = validate_search(&json!({"query": "x", "type": ""})).unwrap_err();
    assert_eq!(err.field, "type");
}

#[test]
fn rejects_non_object_body() {
    let err = validate_search(&json!(["pizza"])).unwrap_err();
    assert_eq!(err.field, "body");
}

// -----------------------------------------------------------------------
// location rules
// -----------------------------------------------------------------------

#[test]
fn location_boundaries_are_inclusive() {
    let params = validate_nearby(&json!({
        "location": {"lat": -90, "lng": 180},
        "type": "park"
    }))
    .expect("valid");
    assert_eq!(
        params.location,
        LatLng {
            lat: -90.0,
            lng: 180.0
        }
    );
}

#[test]
fn location_rejects_out_of_range_latitude() {
    let err = validate_nearby(&json!({
        "location": {"lat": 200, "lng": 0},
        "type": "restaurant"
    }))
    .unwrap_err();
    assert_eq!(err.field, "location.lat");
    assert!(err.message.contains("-90"));
}

#[test]
fn location_rejects_out_of_range_longitude() {
    let err = validate_search(&json!({
        "query": "x",
        "location": {"lat": 0, "lng": -180.5}
    }))
    .unwrap_err();
    assert_eq!(err.field, "location.lng");
}

#[test]
fn location_rejects_non_numeric_and_missing_coordinates() {
    let err = validate_search(&json!({"query": "x", "location": {"lat": "1", "lng": 2}}))
        .unwrap_err();
    assert_eq!(err.field, "location.lat");

    let err = validate_search(&json!({"query": "x", "location": {"lat": 1}})).unwrap_err();
    assert_eq!(err.field, "location.lng");

    let err = validate_search(&json!({"query": "x", "location": "here"})).unwrap_err();
    assert_eq!(err.field, "location");
}

// -----------------------------------------------------------------------
// validate_nearby
// -----------------------------------------------------------------------

#[test]
fn nearby_defaults_radius() {
    let params = validate_nearby(&json!({
        "location": {"lat": 1.5, "lng": 2.5},
        "type": "cafe"
    }))
    .expect("valid");
    assert!((params.radius - DEFAULT_RADIUS_METERS).abs() < f64::EPSILON);
    assert_eq!(params.place_type, "cafe");
}

#[test]
fn nearby_requires_location_and_type() {
    let err = validate_nearby(&json!({"type": "cafe"})).unwrap_err();
    assert_eq!(err.field, "location");

    let err = validate_nearby(&json!({"location": {"lat": 1, "lng": 1}})).unwrap_err();
    assert_eq!(err.field, "type");
}

// -----------------------------------------------------------------------
// validate_place_id
// -----------------------------------------------------------------------

#[test]
fn place_id_is_trimmed_and_required() {
    assert_eq!(validate_place_id(" ChIJ123 ").unwrap(), "ChIJ123");
    assert_eq!(validate_place_id("  ").unwrap_err().field, "placeId");
}
