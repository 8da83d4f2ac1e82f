//! `docs://<category>/<id>` resource URIs.

use std::fmt;

use super::error::DocsError;

/// URI scheme prefix for documentation resources.
pub const DOCS_SCHEME: &str = "docs://";

/// URI template advertised to clients.
pub const DOCS_URI_TEMPLATE: &str = "docs://{category}/{id}";

/// A parsed documentation resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocUri {
    pub category: String,
    pub id: String,
}

impl DocUri {
    pub fn new(category: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            id: id.into(),
        }
    }

    /// Parse a URI of the form `docs://<category>/<id>`.
    ///
    /// The remainder after the scheme must hold exactly two non-empty
    /// `/`-separated segments.
    pub fn parse(uri: &str) -> Result<Self, DocsError> {
        let rest = uri
            .strip_prefix(DOCS_SCHEME)
            .ok_or_else(|| DocsError::invalid_uri(uri))?;

        let mut segments = rest.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(category), Some(id), None) if !category.is_empty() && !id.is_empty() => {
                Ok(Self::new(category, id))
            }
            _ => Err(DocsError::invalid_uri(uri)),
        }
    }
}

impl fmt::Display for DocUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", DOCS_SCHEME, self.category, self.id)
    }
}
