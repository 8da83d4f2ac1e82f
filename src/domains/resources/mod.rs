//! Resources domain module.
//!
//! This module exposes a curated documentation index as MCP resources.
//! Each entry of the index is one resource addressed by
//! `docs://<category>/<id>`.
//!
//! ## Architecture
//!
//! - `index.rs` - Index model and the on-disk store (reloaded per call)
//! - `uri.rs` - Parsing and formatting of `docs://` URIs
//! - `render.rs` - Plain-text rendering of a single entry
//! - `descriptor.rs` - Resource metadata returned by listing
//! - `registry.rs` - Conversion to rmcp resource types, URI templates
//! - `service.rs` - Resource service for listing and reading

mod descriptor;
mod error;
mod index;
mod registry;
mod render;
mod service;
mod uri;

pub use descriptor::{ResourceDescriptor, TEXT_PLAIN};
pub use error::{DocsError, LoadError};
pub use index::{Category, DocEntry, DocsIndex, IndexStore};
pub use registry::get_all_resource_templates;
pub use render::render_entry;
pub use service::DocsResourceService;
pub use uri::{DOCS_SCHEME, DOCS_URI_TEMPLATE, DocUri};
