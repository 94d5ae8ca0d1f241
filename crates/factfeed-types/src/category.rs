use serde::{Deserialize, Serialize};

/// A topical tag with its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Hex color used when rendering the tag.
    pub color: String,
}

const BUILTIN: [(&str, &str); 8] = [
    ("technology", "#3b82f6"),
    ("science", "#16a34a"),
    ("finance", "#ef4444"),
    ("society", "#eab308"),
    ("entertainment", "#db2777"),
    ("health", "#14b8a6"),
    ("history", "#f97316"),
    ("news", "#8b5cf6"),
];

/// Immutable category table, injected at startup. Submissions are checked
/// against it; rows coming back from the store are not.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: Vec<Category>,
}

impl CategoryTable {
    pub fn new(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    /// The standard eight categories.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(name, color)| Category {
                    name: (*name).to_string(),
                    color: (*color).to_string(),
                })
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|c| c.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Feed scope: everything, or one named category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn named(name: impl Into<String>) -> Self {
        CategoryFilter::Named(name.into())
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}
