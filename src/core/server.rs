//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating resource requests to the documentation service.
//! The server declares only the resources capability.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::resources::{DOCS_URI_TEMPLATE, DocsError, DocsResourceService};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap
/// to clone so transports can hand one copy to each connection.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    docs_service: Arc<DocsResourceService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let docs_service = Arc::new(DocsResourceService::new(config.resources.clone()));

        Self {
            config,
            docs_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Instructions sent to clients on initialize.
    pub fn instructions(&self) -> String {
        format!(
            "Curated documentation references. List resources to discover entries, \
             then read them by URI ({}).",
            DOCS_URI_TEMPLATE
        )
    }

    /// Load the index once and return how many entries it holds.
    pub fn check_index(&self) -> Result<usize> {
        let store = self.docs_service.store();
        let index = store.load().map_err(DocsError::from)?;
        info!(
            "Documentation index {} holds {} entries in {} categories",
            store.path().display(),
            index.entry_count(),
            index.categories().len()
        );
        Ok(index.entry_count())
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available resources (for HTTP transport).
    pub async fn list_resources_json(
        &self,
    ) -> std::result::Result<Vec<serde_json::Value>, McpError> {
        let descriptors = self.docs_service.list_descriptors()?;

        descriptors
            .into_iter()
            .map(|d| {
                serde_json::to_value(d).map_err(|e| McpError::internal_error(e.to_string(), None))
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource_json(
        &self,
        uri: &str,
    ) -> std::result::Result<serde_json::Value, McpError> {
        let result = self.docs_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates_json(&self) -> Vec<serde_json::Value> {
        let templates = self.docs_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder().enable_resources().build(),
            server_info: Implementation {
                name: self.name().into(),
                version: self.version().into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.docs_service.list_resources().await?;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.docs_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.docs_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| {
                warn!("Failed to read {}: {}", request.uri, e);
                McpError::from(e)
            })
    }
}
