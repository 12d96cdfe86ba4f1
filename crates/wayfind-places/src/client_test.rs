use super::*;

fn test_client(base_url: &str) -> GooglePlacesClient {
    GooglePlacesClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[test]
fn endpoint_appends_method_segment() {
    let client = test_client("https://places.googleapis.com/v1");
    let url = client.endpoint(&["places:searchText"]);
    assert_eq!(
        url.as_str(),
        "https://places.googleapis.com/v1/places:searchText"
    );
}

#[test]
fn endpoint_strips_trailing_slash() {
    let client = test_client("https://places.googleapis.com/v1/");
    let url = client.endpoint(&["places", "ChIJ123"]);
    assert_eq!(url.as_str(), "https://places.googleapis.com/v1/places/ChIJ123");
}

#[test]
fn endpoint_encodes_place_id() {
    let client = test_client("https://places.googleapis.com/v1");
    let url = client.endpoint(&["places", "a/b c"]);
    assert_eq!(
        url.as_str(),
        "https://places.googleapis.com/v1/places/a%2Fb%20c"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = GooglePlacesClient::with_base_url("k", 5, "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}
