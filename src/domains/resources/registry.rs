//! Conversion of documentation descriptors into MCP resource types.
//!
//! Resources are not registered statically: every entry of the index
//! becomes one resource at list time. The only static registration is the
//! `docs://{category}/{id}` URI template.

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};

use super::descriptor::{ResourceDescriptor, TEXT_PLAIN};
use super::uri::DOCS_URI_TEMPLATE;

/// Build an MCP resource from a descriptor.
pub fn build_resource(descriptor: ResourceDescriptor) -> Resource {
    let mut raw = RawResource::new(descriptor.uri, descriptor.name);
    raw.description = Some(descriptor.description);
    raw.mime_type = Some(descriptor.mime_type);
    raw.no_annotation()
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: DOCS_URI_TEMPLATE.to_string(),
            name: "Documentation Entries".to_string(),
            title: Some("Curated Documentation".to_string()),
            description: Some(
                "Read a curated documentation reference by category and entry id".to_string(),
            ),
            mime_type: Some(TEXT_PLAIN.to_string()),
        }
        .no_annotation(),
    ]
}
