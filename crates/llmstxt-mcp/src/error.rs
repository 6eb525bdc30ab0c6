//! Error types for the llms-txt-explorer MCP server with MCP error code mapping

use rmcp::model::ErrorCode;
use thiserror::Error;

/// Errors that can occur in the MCP server
#[derive(Debug, Error)]
pub enum McpError {
    /// Core library operation failed
    #[error("core error: {0}")]
    Core(#[from] llmstxt_core::Error),

    /// JSON serialization/deserialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Protocol error
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParams(String),

    /// Tool name not recognised
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Resource host not present in the registry
    #[error("Website {0} not found in known websites")]
    WebsiteNotFound(String),
}

impl McpError {
    /// Map error to MCP error code
    pub const fn error_code(&self) -> i32 {
        match self {
            Self::Core(_) | Self::Internal(_) => -32603, // Internal error
            Self::Json(_) => -32700,                     // Parse error
            Self::Protocol(_) => -32600,                 // Invalid request
            Self::InvalidParams(_) | Self::UnknownTool(_) | Self::WebsiteNotFound(_) => {
                -32602 // Invalid params
            },
        }
    }
}

impl From<McpError> for rmcp::ErrorData {
    fn from(err: McpError) -> Self {
        Self::new(ErrorCode(err.error_code()), err.to_string(), None)
    }
}

/// Result type alias for MCP operations
pub type McpResult<T> = Result<T, McpError>;
