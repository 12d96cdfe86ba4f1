//! Tool catalogue and dispatch.
//!
//! Every tool validates its arguments with the same validators as the HTTP
//! API and then calls the shared [`PlacesService`].

use serde::Serialize;
use serde_json::{json, Map, Value};
use wayfind_core::{validate_nearby, validate_place_id, validate_search, ValidationError};
use wayfind_places::{PlacesService, ServiceError};

pub const SEARCH_PLACES: &str = "search_places";
pub const FIND_NEARBY_PLACES: &str = "find_nearby_places";
pub const GET_PLACE_DETAILS: &str = "get_place_details";
pub const GET_PLACE_TYPES: &str = "get_place_types";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

/// The `tools/call` result body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    fn text(text: String) -> Self {
        Self {
            content: vec![ToolContent { kind: "text", text }],
            is_error: None,
        }
    }

    fn error(tool: &str, message: &str) -> Self {
        Self {
            content: vec![ToolContent {
                kind: "text",
                text: format!("Error executing {tool}: {message}"),
            }],
            is_error: Some(true),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }
}

fn location_schema() -> Value {
    json!({
        "type": "object",
        "description": "Geographic coordinates",
        "properties": {
            "lat": {"type": "number", "minimum": -90, "maximum": 90},
            "lng": {"type": "number", "minimum": -180, "maximum": 180}
        },
        "required": ["lat", "lng"]
    })
}

fn radius_schema(description: &str) -> Value {
    json!({
        "type": "number",
        "exclusiveMinimum": 0,
        "maximum": 50000,
        "description": description
    })
}

/// Definitions returned from `tools/list`.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: SEARCH_PLACES,
            description: "Search for places by free-text query, optionally biased towards a location.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "What to search for (e.g. 'pizza in Brooklyn', 'coffee shops')"
                    },
                    "location": location_schema(),
                    "radius": radius_schema("Bias radius in meters (default 5000, max 50000)"),
                    "type": {
                        "type": "string",
                        "description": "Restrict results to a place type (see get_place_types)"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: FIND_NEARBY_PLACES,
            description: "Find places of a given type within a radius of a location.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location": location_schema(),
                    "type": {
                        "type": "string",
                        "description": "Place type to look for (e.g. 'restaurant', 'cafe')"
                    },
                    "radius": radius_schema("Search radius in meters (default 5000, max 50000)")
                },
                "required": ["location", "type"]
            }),
        },
        ToolDefinition {
            name: GET_PLACE_DETAILS,
            description: "Get contact details, opening hours, reviews and photos for a place.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "placeId": {
                        "type": "string",
                        "description": "Place id returned by a search"
                    }
                },
                "required": ["placeId"]
            }),
        },
        ToolDefinition {
            name: GET_PLACE_TYPES,
            description: "List the place types accepted by the search tools.",
            input_schema: json!({"type": "object", "properties": {}}),
        },
    ]
}

#[derive(Debug)]
enum ToolFailure {
    Invalid(ValidationError),
    Service(ServiceError),
    UnknownTool,
}

impl ToolFailure {
    fn message(&self, tool: &str) -> String {
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::Service(e) => e.to_string(),
            Self::UnknownTool => format!("Unknown tool: {tool}"),
        }
    }
}

impl From<ValidationError> for ToolFailure {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

impl From<ServiceError> for ToolFailure {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

/// Runs a tool by name. Never fails at the protocol level: validation,
/// provider and lookup failures come back as an error-flagged result.
pub async fn call_tool(service: &PlacesService, name: &str, arguments: &Value) -> CallToolResult {
    match dispatch(service, name, arguments).await {
        Ok(payload) => match serde_json::to_string_pretty(&payload) {
            Ok(text) => CallToolResult::text(text),
            Err(e) => CallToolResult::error(name, &e.to_string()),
        },
        Err(failure) => {
            let message = failure.message(name);
            tracing::warn!(tool = name, error = %message, "tool call failed");
            CallToolResult::error(name, &message)
        }
    }
}

async fn dispatch(
    service: &PlacesService,
    name: &str,
    arguments: &Value,
) -> Result<Value, ToolFailure> {
    match name {
        SEARCH_PLACES => {
            let params = validate_search(arguments)?;
            let results = service.search_places(&params).await?;
            Ok(json!({
                "success": true,
                "message": format!("Found {} places", results.len()),
                "count": results.len(),
                "results": results,
            }))
        }
        FIND_NEARBY_PLACES => {
            let params = validate_nearby(arguments)?;
            let results = service.find_nearby_places(&params).await?;
            Ok(json!({
                "success": true,
                "message": format!("Found {} nearby places", results.len()),
                "count": results.len(),
                "results": results,
            }))
        }
        GET_PLACE_DETAILS => {
            let place_id = match arguments.get("placeId") {
                Some(Value::String(id)) => validate_place_id(id)?,
                _ => return Err(ValidationError::new("placeId", "placeId is required").into()),
            };
            let details = service.get_place_details(&place_id).await?;
            Ok(json!({
                "success": true,
                "message": "Place details retrieved successfully",
                "placeDetails": details,
            }))
        }
        GET_PLACE_TYPES => Ok(json!({
            "success": true,
            "message": "Available place types retrieved successfully",
            "placeTypes": service.place_types(),
        })),
        _ => Err(ToolFailure::UnknownTool),
    }
}

/// Arguments default to an empty object when the client omits them.
#[must_use]
pub fn arguments_or_empty(arguments: Option<&Value>) -> Value {
    match arguments {
        Some(Value::Null) | None => Value::Object(Map::new()),
        Some(value) => value.clone(),
    }
}

#[cfg(test)]
#[path = "tools_test.rs"]
mod tests;
