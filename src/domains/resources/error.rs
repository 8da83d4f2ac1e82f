//! Documentation resource error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the documentation index from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The index file is missing or unreadable.
    #[error("Failed to read documentation index {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The index file is not a JSON object.
    #[error("Malformed documentation index {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A category does not hold an array of well-formed entries.
    #[error("Malformed category '{category}' in {}: {source}", path.display())]
    InvalidCategory {
        path: PathBuf,
        category: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while listing or reading documentation resources.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The documentation index could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The resource URI is not of the form `docs://<category>/<id>`.
    #[error("Invalid URI format: {0}")]
    InvalidUri(String),

    /// The category segment is not present in the index.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// The id is not present within an existing category.
    #[error("Document not found: {id} in {category}")]
    DocumentNotFound { category: String, id: String },
}

impl DocsError {
    /// Create a new "invalid URI" error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }

    /// Create a new "category not found" error.
    pub fn category_not_found(category: impl Into<String>) -> Self {
        Self::CategoryNotFound(category.into())
    }

    /// Create a new "document not found" error.
    pub fn document_not_found(category: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DocumentNotFound {
            category: category.into(),
            id: id.into(),
        }
    }
}
