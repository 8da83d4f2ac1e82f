//! Documentation index model and its on-disk store.
//!
//! The index is a JSON object mapping category names to arrays of entries.
//! It is read fresh on every call; nothing is cached between requests, so
//! edits to the file are visible on the next `resources/list` or
//! `resources/read`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::error::LoadError;

/// A single documentation reference within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// Identifier, unique within its category.
    pub id: String,

    /// Human-readable title.
    pub name: String,

    pub description: String,

    /// Canonical reference link.
    pub url: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Related topic labels. Free text, not checked against entry ids.
    #[serde(default)]
    pub related: Vec<String>,
}

/// A named group of entries, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<DocEntry>,
}

/// The loaded documentation index.
///
/// Categories and entries keep the order they have in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsIndex {
    categories: Vec<Category>,
}

impl DocsIndex {
    /// Parse an index from JSON text. `path` is only used for error context.
    pub fn from_json(text: &str, path: &Path) -> Result<Self, LoadError> {
        let root: Map<String, Value> =
            serde_json::from_str(text).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut categories = Vec::with_capacity(root.len());
        for (name, value) in root {
            let entries: Vec<DocEntry> =
                serde_json::from_value(value).map_err(|source| LoadError::InvalidCategory {
                    path: path.to_path_buf(),
                    category: name.clone(),
                    source,
                })?;
            categories.push(Category { name, entries });
        }

        Ok(Self { categories })
    }

    /// All categories in document order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Find the first entry with `id` inside `category`.
    pub fn find(&self, category: &str, id: &str) -> Option<&DocEntry> {
        self.category(category)?
            .entries
            .iter()
            .find(|entry| entry.id == id)
    }

    /// Iterate `(category, entry)` pairs in category-then-insertion order.
    pub fn iter_entries(&self) -> impl Iterator<Item = (&str, &DocEntry)> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(move |e| (c.name.as_str(), e)))
    }

    /// Total number of entries across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

/// Reads the documentation index from a fixed file location.
#[derive(Debug, Clone)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    /// Create a store reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the index file.
    pub fn load(&self) -> Result<DocsIndex, LoadError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Read {
            path: self.path.clone(),
            source,
        })?;
        let index = DocsIndex::from_json(&text, &self.path)?;
        debug!(
            "Loaded {} entries in {} categories from {}",
            index.entry_count(),
            index.categories().len(),
            self.path.display()
        );
        Ok(index)
    }
}
