//! Transport selection.
//!
//! `MCP_TRANSPORT` picks one of the transports compiled in through cargo
//! features. Naming a transport that is not compiled in is an error rather
//! than a silent fallback.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{TransportError, TransportResult};

#[cfg(not(any(feature = "stdio", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio or http");

/// The transport the server is served over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP over stdin/stdout, handled by rmcp.
    #[cfg(feature = "stdio")]
    Stdio,

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP listener settings.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Route accepting JSON-RPC POSTs.
    pub rpc_path: String,
    /// Permissive CORS for browser clients.
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rpc_path: "/mcp".to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> TransportResult<Self> {
        let mut config = Self::default();

        if let Some(host) = var("MCP_HTTP_HOST") {
            config.host = host;
        }
        if let Some(port) = var("MCP_HTTP_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| TransportError::invalid_setting("MCP_HTTP_PORT", &port))?;
        }
        if let Some(path) = var("MCP_HTTP_PATH") {
            if !path.starts_with('/') {
                return Err(TransportError::invalid_setting("MCP_HTTP_PATH", &path));
            }
            config.rpc_path = path;
        }
        if let Some(cors) = var("MCP_HTTP_CORS") {
            config.enable_cors = !matches!(cors.trim().to_lowercase().as_str(), "false" | "0");
        }

        Ok(config)
    }

    /// The `host:port` the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for TransportConfig {
    #[cfg(feature = "stdio")]
    fn default() -> Self {
        Self::Stdio
    }

    #[cfg(not(feature = "stdio"))]
    fn default() -> Self {
        Self::Http(HttpConfig::default())
    }
}

impl TransportConfig {
    /// Read the transport selection from the process environment.
    pub fn from_env() -> TransportResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Read the transport selection through a variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> TransportResult<Self> {
        let selected = var("MCP_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match selected.as_str() {
            "" => Ok(Self::default()),
            #[cfg(feature = "stdio")]
            "stdio" => Ok(Self::Stdio),
            #[cfg(feature = "http")]
            "http" => Ok(Self::Http(HttpConfig::from_vars(&var)?)),
            other => Err(TransportError::unsupported(other)),
        }
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => f.write_str("stdio"),
            #[cfg(feature = "http")]
            Self::Http(cfg) => write!(f, "http://{}{}", cfg.address(), cfg.rpc_path),
        }
    }
}
