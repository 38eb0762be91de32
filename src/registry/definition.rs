//! Data structures for the agent catalog file.

use serde::{Deserialize, Serialize};

/// An agent profile as described by the catalog.
///
/// The `id` doubles as the installed filename stem (`<id>.md`) and the
/// lookup key. `version` is informational only; no ordering or comparison
/// is ever performed on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Category id. Not validated against the category set at load time;
    /// an agent may reference a category that does not exist.
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// On-disk shape of `registry.json`. Absent collections default to empty.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub agents: Vec<Agent>,
}
