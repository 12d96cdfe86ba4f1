use thiserror::Error;

/// Transport-level failures. Tool and protocol errors are answered in-band
/// and never surface here.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("stdio transport error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}
