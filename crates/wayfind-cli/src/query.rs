//! One-shot query subcommands.
//!
//! Flags are assembled into the same JSON shape the HTTP API accepts and run
//! through the shared validators, so the CLI rejects exactly what the server
//! rejects.

use clap::Args;
use serde_json::{json, Map, Value};
use wayfind_core::{validate_nearby, validate_place_id, validate_search};
use wayfind_places::PlacesService;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// What to search for (e.g. "pizza in Brooklyn")
    pub query: String,
    /// Latitude to bias results towards
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Longitude to bias results towards
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,
    /// Bias radius in meters
    #[arg(long)]
    pub radius: Option<f64>,
    /// Restrict to a place type (see `wayfind types`)
    #[arg(long = "type")]
    pub place_type: Option<String>,
}

#[derive(Debug, Args)]
pub struct NearbyArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,
    /// Place type to look for
    #[arg(long = "type")]
    pub place_type: String,
    /// Search radius in meters (default 5000)
    #[arg(long)]
    pub radius: Option<f64>,
}

impl SearchArgs {
    pub(crate) fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_owned(), json!(self.query));
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            body.insert("location".to_owned(), json!({"lat": lat, "lng": lng}));
        }
        if let Some(radius) = self.radius {
            body.insert("radius".to_owned(), json!(radius));
        }
        if let Some(place_type) = &self.place_type {
            body.insert("type".to_owned(), json!(place_type));
        }
        Value::Object(body)
    }
}

impl NearbyArgs {
    pub(crate) fn to_body(&self) -> Value {
        let mut body = json!({
            "location": {"lat": self.lat, "lng": self.lng},
            "type": self.place_type,
        });
        if let Some(radius) = self.radius {
            body["radius"] = json!(radius);
        }
        body
    }
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// # Errors
///
/// Returns an error if the arguments fail validation or the provider call fails.
pub(crate) async fn run_search(places: &PlacesService, args: &SearchArgs) -> anyhow::Result<()> {
    let params = validate_search(&args.to_body())?;
    let results = places.search_places(&params).await?;
    tracing::info!(query = %params.query, count = results.len(), "search complete");
    print_json(&results)
}

/// # Errors
///
/// Returns an error if the arguments fail validation or the provider call fails.
pub(crate) async fn run_nearby(places: &PlacesService, args: &NearbyArgs) -> anyhow::Result<()> {
    let params = validate_nearby(&args.to_body())?;
    let results = places.find_nearby_places(&params).await?;
    tracing::info!(place_type = %params.place_type, count = results.len(), "nearby search complete");
    print_json(&results)
}

/// # Errors
///
/// Returns an error if the id is blank or the provider call fails.
pub(crate) async fn run_details(places: &PlacesService, place_id: &str) -> anyhow::Result<()> {
    let place_id = validate_place_id(place_id)?;
    let details = places.get_place_details(&place_id).await?;
    print_json(&details)
}
