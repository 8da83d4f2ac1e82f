//! Transports the documentation server can be reached over.
//!
//! - `stdio` (default feature): the standard MCP mode, driven by rmcp.
//! - `http`: JSON-RPC over HTTP POST for plain HTTP clients.

mod config;
mod error;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "http")]
pub use config::HttpConfig;

use tracing::info;

use super::{McpServer, Result};

/// Serve `server` over the selected transport until it shuts down.
pub async fn serve(transport: TransportConfig, server: McpServer) -> Result<()> {
    info!("Serving over {}", transport);

    match transport {
        #[cfg(feature = "stdio")]
        TransportConfig::Stdio => stdio::serve_stdio(server).await?,
        #[cfg(feature = "http")]
        TransportConfig::Http(cfg) => http::HttpTransport::new(cfg).run(server).await?,
    }

    Ok(())
}
