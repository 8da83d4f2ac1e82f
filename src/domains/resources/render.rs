//! Plain-text rendering of documentation entries.

use super::index::DocEntry;

/// Render an entry as the text body returned by `resources/read`.
///
/// Every section is always present; empty tag or related lists leave an
/// empty line under their header.
pub fn render_entry(entry: &DocEntry) -> String {
    format!(
        "# {name}\n\n{description}\n\n## Documentation URL\n{url}\n\n## Tags\n{tags}\n\n## Related Topics\n{related}\n",
        name = entry.name,
        description = entry.description,
        url = entry.url,
        tags = entry.tags.join(", "),
        related = entry.related.join(", "),
    )
}
