//! Documentation Index MCP Server Library
//!
//! This crate exposes a curated documentation index (a JSON file mapping
//! categories to documentation references) as MCP resources addressed by
//! `docs://<category>/<id>`.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **resources**: Index loading, URI parsing, rendering and the resource service
//!
//! # Example
//!
//! ```rust,no_run
//! use docs_index_mcp_server::core::{Config, McpServer, serve};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone());
//!     serve(config.transport, server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
