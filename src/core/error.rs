//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type covering the documentation
//! domain, configuration and the transport layer, plus the mapping of
//! domain errors onto MCP protocol errors.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use super::transport::TransportError;
use crate::domains::resources::DocsError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the documentation resources domain.
    #[error("Resource error: {0}")]
    Docs(#[from] DocsError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors raised by the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<DocsError> for McpError {
    fn from(err: DocsError) -> Self {
        let message = err.to_string();
        match err {
            DocsError::InvalidUri(_) => McpError::invalid_params(message, None),
            DocsError::CategoryNotFound(_) | DocsError::DocumentNotFound { .. } => {
                McpError::resource_not_found(message, None)
            }
            DocsError::Load(_) => McpError::internal_error(message, None),
        }
    }
}
