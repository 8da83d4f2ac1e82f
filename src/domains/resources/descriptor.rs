//! Resource descriptors produced by `resources/list`.

use serde::{Deserialize, Serialize};

use super::index::DocEntry;
use super::uri::DocUri;

/// MIME type of every rendered documentation entry.
pub const TEXT_PLAIN: &str = "text/plain";

/// Metadata describing one addressable documentation resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// The `docs://<category>/<id>` URI of the resource.
    pub uri: String,

    /// The entry title.
    pub name: String,

    /// The entry description.
    pub description: String,

    /// Always `text/plain`.
    pub mime_type: String,
}

impl ResourceDescriptor {
    /// Describe `entry` as a resource within `category`.
    pub fn from_entry(category: &str, entry: &DocEntry) -> Self {
        Self {
            uri: DocUri::new(category, &entry.id).to_string(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            mime_type: TEXT_PLAIN.to_string(),
        }
    }
}
