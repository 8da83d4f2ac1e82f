//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors raised while selecting or running a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// `MCP_TRANSPORT` names a transport this build does not include.
    #[error("Unsupported transport '{0}'")]
    Unsupported(String),

    /// A transport setting could not be parsed.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidSetting { name: String, value: String },

    /// The listener could not bind its address.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP handshake or the rmcp service loop failed.
    #[error("MCP service error: {0}")]
    Service(String),

    /// The HTTP server stopped with an error.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl TransportError {
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::Unsupported(name.into())
    }

    pub fn invalid_setting(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSetting {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }
}
