use serde_json::json;

use super::*;

#[test]
fn parses_mcp_command() {
    let cli = Cli::try_parse_from(["wayfind", "mcp"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Mcp));
}

#[test]
fn parses_types_command() {
    let cli = Cli::try_parse_from(["wayfind", "types"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Types));
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["wayfind"]).is_err());
}

#[test]
fn search_with_query_only() {
    let cli = Cli::try_parse_from(["wayfind", "search", "pizza"]).unwrap();
    let Commands::Search(args) = cli.command else {
        panic!("expected search");
    };
    assert_eq!(args.to_body(), json!({"query": "pizza"}));
}

#[test]
fn search_with_location_radius_and_type() {
    let cli = Cli::try_parse_from([
        "wayfind", "search", "coffee", "--lat", "40.7", "--lng", "-74.0", "--radius", "800",
        "--type", "cafe",
    ])
    .unwrap();
    let Commands::Search(args) = cli.command else {
        panic!("expected search");
    };
    assert_eq!(
        args.to_body(),
        json!({
            "query": "coffee",
            "location": {"lat": 40.7, "lng": -74.0},
            "radius": 800.0,
            "type": "cafe"
        })
    );
}

#[test]
fn search_lat_without_lng_is_rejected() {
    assert!(Cli::try_parse_from(["wayfind", "search", "pizza", "--lat", "1.0"]).is_err());
}

#[test]
fn nearby_requires_type() {
    assert!(Cli::try_parse_from(["wayfind", "nearby", "--lat", "1", "--lng", "2"]).is_err());
}

#[test]
fn nearby_body_matches_http_shape() {
    let cli = Cli::try_parse_from([
        "wayfind", "nearby", "--lat", "-33.86", "--lng", "151.2", "--type", "museum",
    ])
    .unwrap();
    let Commands::Nearby(args) = cli.command else {
        panic!("expected nearby");
    };
    let body = args.to_body();
    assert_eq!(body["location"], json!({"lat": -33.86, "lng": 151.2}));
    assert_eq!(body["type"], "museum");
    assert!(body.get("radius").is_none());

    let params = wayfind_core::validate_nearby(&body).unwrap();
    assert!((params.radius - wayfind_core::DEFAULT_RADIUS_METERS).abs() < f64::EPSILON);
}

#[test]
fn details_takes_positional_place_id() {
    let cli = Cli::try_parse_from(["wayfind", "details", "ChIJN1t_tDeuEmsRUsoyG83frY4"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Details { ref place_id } if place_id == "ChIJN1t_tDeuEmsRUsoyG83frY4"
    ));
}
