//! Newline-delimited JSON-RPC loop.
//!
//! One message per line in each direction. Requests are answered in order;
//! notifications get no reply. Log output must never go to stdout, which is
//! the protocol channel.

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use wayfind_places::PlacesService;

use crate::error::McpError;
use crate::protocol::{
    JsonRpcRequest, JsonRpcResponse, RpcError, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION,
};
use crate::tools::{arguments_or_empty, call_tool, tool_definitions};

pub const SERVER_NAME: &str = "wayfind";

#[derive(Clone)]
pub struct McpServer {
    places: PlacesService,
}

impl McpServer {
    pub fn new(places: PlacesService) -> Self {
        Self { places }
    }

    /// Handles one raw line. Returns `None` for notifications and blank lines.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let raw: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable message");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::new(PARSE_ERROR, "Parse error"),
                ));
            }
        };

        let id = raw.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    id,
                    RpcError::new(INVALID_REQUEST, format!("Invalid request: {e}")),
                ));
            }
        };

        self.handle_request(request).await
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "mcp request");

        if request.is_notification() {
            if request.method != "notifications/initialized" {
                tracing::debug!(method = %request.method, "ignoring notification");
            }
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        let outcome = match request.method.as_str() {
            "initialize" => Ok(initialize_result()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tool_definitions() })),
            "tools/call" => self.tools_call(request.params.as_ref()).await,
            other => Err(RpcError::new(
                METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            )),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    async fn tools_call(&self, params: Option<&Value>) -> Result<Value, RpcError> {
        let Some(Value::Object(params)) = params else {
            return Err(RpcError::new(
                INVALID_PARAMS,
                "tools/call params must be an object",
            ));
        };
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return Err(RpcError::new(INVALID_PARAMS, "tools/call requires a tool name"));
        };

        let arguments = arguments_or_empty(params.get("arguments"));
        let result = call_tool(&self.places, name, &arguments).await;
        tracing::info!(tool = name, is_error = result.is_error(), "tool call complete");

        serde_json::to_value(result)
            .map_err(|e| RpcError::new(INTERNAL_ERROR, format!("failed to encode result: {e}")))
    }

    /// Reads messages from `reader` until EOF, writing one response line per
    /// request to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`McpError`] if reading, writing or encoding a response fails.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(response) = self.handle_line(&line).await else {
                continue;
            };
            let mut encoded = serde_json::to_vec(&response)?;
            encoded.push(b'\n');
            writer.write_all(&encoded).await?;
            writer.flush().await?;
        }
        tracing::info!("stdin closed, mcp server exiting");
        Ok(())
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
    })
}

/// Serves MCP on the process's stdin/stdout until stdin closes.
///
/// # Errors
///
/// Returns [`McpError`] on stdio failure.
pub async fn run_stdio(places: PlacesService) -> Result<(), McpError> {
    tracing::info!("mcp server listening on stdio");
    let server = McpServer::new(places);
    server
        .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_advertises_tools_capability() {
        let result = initialize_result();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["capabilities"], json!({"tools": {}}));
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    }
}
