//! Documentation resource service.
//!
//! The service answers `resources/list` and `resources/read` against the
//! documentation index. It holds only the index location; the index itself
//! is reloaded on every call.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::{debug, info};

use super::descriptor::{ResourceDescriptor, TEXT_PLAIN};
use super::error::DocsError;
use super::index::IndexStore;
use super::registry::{build_resource, get_all_resource_templates};
use super::render::render_entry;
use super::uri::DocUri;
use crate::core::config::ResourcesConfig;

/// Service exposing documentation entries as resources.
pub struct DocsResourceService {
    store: IndexStore,
}

impl DocsResourceService {
    /// Create a new service with the given configuration.
    pub fn new(config: ResourcesConfig) -> Self {
        info!(
            "Initializing DocsResourceService (index: {})",
            config.index_path.display()
        );
        Self {
            store: IndexStore::new(config.index_path),
        }
    }

    /// The underlying index store.
    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    /// Describe every entry, in category-then-insertion order.
    pub fn list_descriptors(&self) -> Result<Vec<ResourceDescriptor>, DocsError> {
        let index = self.store.load()?;
        Ok(index
            .iter_entries()
            .map(|(category, entry)| ResourceDescriptor::from_entry(category, entry))
            .collect())
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Result<Vec<Resource>, DocsError> {
        let resources: Vec<Resource> = self
            .list_descriptors()?
            .into_iter()
            .map(build_resource)
            .collect();
        debug!("Listed {} documentation resources", resources.len());
        Ok(resources)
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        get_all_resource_templates()
    }

    /// Resolve a `docs://<category>/<id>` URI into rendered text.
    pub fn read_text(&self, uri: &str) -> Result<String, DocsError> {
        let DocUri { category, id } = DocUri::parse(uri)?;
        let index = self.store.load()?;

        if index.category(&category).is_none() {
            return Err(DocsError::category_not_found(category));
        }
        let entry = index
            .find(&category, &id)
            .ok_or_else(|| DocsError::document_not_found(&category, &id))?;

        Ok(render_entry(entry))
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, DocsError> {
        let text = self.read_text(uri)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(TEXT_PLAIN.to_string()),
                text,
                meta: None,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::LoadError;
    use std::path::Path;

    const RUST_BOOK: &str = r#"{"rust": [{"id":"book","name":"The Rust Book","description":"Intro","url":"https://doc.rust-lang.org/book/","tags":["rust","learning"],"related":[]}]}"#;

    const MULTI: &str = r#"{
        "rust": [
            {"id": "book", "name": "The Rust Book", "description": "Intro",
             "url": "https://doc.rust-lang.org/book/", "tags": ["rust"]},
            {"id": "nomicon", "name": "The Rustonomicon", "description": "Unsafe Rust",
             "url": "https://doc.rust-lang.org/nomicon/"}
        ],
        "web": [
            {"id": "axum", "name": "Axum", "description": "Web framework",
             "url": "https://docs.rs/axum", "related": ["tokio", "tower"]}
        ],
        "empty": []
    }"#;

    fn service_for(dir: &tempfile::TempDir, json: &str) -> DocsResourceService {
        let path = dir.path().join("docs-index.json");
        std::fs::write(&path, json).unwrap();
        DocsResourceService::new(ResourcesConfig { index_path: path })
    }

    #[test]
    fn test_example_list() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, RUST_BOOK);

        let descriptors = service.list_descriptors().unwrap();
        assert_eq!(
            descriptors,
            vec![ResourceDescriptor {
                uri: "docs://rust/book".to_string(),
                name: "The Rust Book".to_string(),
                description: "Intro".to_string(),
                mime_type: "text/plain".to_string(),
            }]
        );
    }

    #[test]
    fn test_example_read() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, RUST_BOOK);

        let text = service.read_text("docs://rust/book").unwrap();
        assert!(text.contains("# The Rust Book"));
        assert!(text.contains("https://doc.rust-lang.org/book/"));
        assert!(text.contains("rust, learning"));
        assert!(text.ends_with("## Related Topics\n\n"));
    }

    #[test]
    fn test_list_has_one_descriptor_per_entry_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, MULTI);

        let uris: Vec<_> = service
            .list_descriptors()
            .unwrap()
            .into_iter()
            .map(|d| d.uri)
            .collect();
        assert_eq!(
            uris,
            ["docs://rust/book", "docs://rust/nomicon", "docs://web/axum"]
        );
    }

    #[test]
    fn test_every_listed_uri_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, MULTI);

        for descriptor in service.list_descriptors().unwrap() {
            let text = service.read_text(&descriptor.uri).unwrap();
            assert!(text.contains(&descriptor.name));
            assert!(text.contains(&descriptor.description));
        }
    }

    #[test]
    fn test_read_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, MULTI);

        let first = service.read_text("docs://web/axum").unwrap();
        let second = service.read_text("docs://web/axum").unwrap();
        assert_eq!(first, second);
        assert!(first.contains("tokio, tower"));
    }

    #[test]
    fn test_read_invalid_uri() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, MULTI);

        match service.read_text("docs://onlyonesegment") {
            Err(DocsError::InvalidUri(uri)) => assert_eq!(uri, "docs://onlyonesegment"),
            other => panic!("Expected InvalidUri, got {:?}", other),
        }
    }

    #[test]
    fn test_read_unknown_category() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, MULTI);

        match service.read_text("docs://nope/x") {
            Err(DocsError::CategoryNotFound(category)) => assert_eq!(category, "nope"),
            other => panic!("Expected CategoryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, MULTI);

        match service.read_text("docs://rust/does-not-exist") {
            Err(DocsError::DocumentNotFound { category, id }) => {
                assert_eq!(category, "rust");
                assert_eq!(id, "does-not-exist");
            }
            other => panic!("Expected DocumentNotFound, got {:?}", other),
        }

        // An existing but empty category still reports the missing id.
        assert!(matches!(
            service.read_text("docs://empty/anything"),
            Err(DocsError::DocumentNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_index_propagates_load_error() {
        let service = DocsResourceService::new(ResourcesConfig {
            index_path: Path::new("/nonexistent/docs-index.json").to_path_buf(),
        });

        assert!(matches!(
            service.list_descriptors(),
            Err(DocsError::Load(LoadError::Read { .. }))
        ));
        assert!(matches!(
            service.read_text("docs://rust/book"),
            Err(DocsError::Load(_))
        ));
    }

    #[tokio::test]
    async fn test_list_resources_as_mcp_resources() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, MULTI);

        let resources = service.list_resources().await.unwrap();
        assert_eq!(resources.len(), 3);
        assert_eq!(resources[2].raw.uri, "docs://web/axum");
        assert_eq!(resources[2].raw.mime_type.as_deref(), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_read_resource_wraps_text() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, RUST_BOOK);

        let result = service.read_resource("docs://rust/book").await.unwrap();
        assert_eq!(result.contents.len(), 1);
        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                uri,
                mime_type,
                text,
                ..
            } => {
                assert_eq!(uri, "docs://rust/book");
                assert_eq!(mime_type.as_deref(), Some("text/plain"));
                assert!(text.starts_with("# The Rust Book\n"));
            }
            other => panic!("Expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_resource_templates() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir, MULTI);

        let templates = service.list_resource_templates().await;
        assert_eq!(templates.len(), 1);
    }
}
