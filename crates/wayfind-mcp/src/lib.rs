//! Model Context Protocol server exposing the places tools over stdio.
//!
//! Messages are newline-delimited JSON-RPC 2.0. Each tool is a thin wrapper
//! around [`wayfind_places::PlacesService`]; tool failures are reported inside
//! the tool result (`isError: true`) rather than as JSON-RPC errors.

pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::McpError;
pub use server::{run_stdio, McpServer};
pub use tools::{call_tool, tool_definitions, CallToolResult, ToolDefinition};
