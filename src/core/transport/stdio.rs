//! Stdio transport: rmcp reads requests from stdin and writes responses to
//! stdout until the client closes stdin.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Serve `server` over stdin/stdout, returning once the client disconnects.
pub async fn serve_stdio(server: McpServer) -> TransportResult<()> {
    let name = server.name().to_string();

    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::service(format!("initialize failed: {}", e)))?;
    info!("{} ready on stdio", name);

    running
        .waiting()
        .await
        .map_err(|e| TransportError::service(e.to_string()))?;
    info!("stdio session closed");

    Ok(())
}
