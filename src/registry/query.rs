//! Pure queries over the loaded catalog.
//!
//! All operations are total: unknown ids yield `None` or an empty slice,
//! never an error. Results preserve catalog order; there is no ranking.

use super::definition::{Agent, CatalogFile, Category};
use std::collections::HashMap;

/// In-memory catalog. Ordered vectors keep display order; id indexes give
/// O(1) lookup. Read-only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    agents: Vec<Agent>,
    categories: Vec<Category>,
    agent_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(file: CatalogFile) -> Self {
        // First entry wins on duplicate ids, matching linear-scan lookup.
        let mut agent_index = HashMap::new();
        for (i, agent) in file.agents.iter().enumerate() {
            agent_index.entry(agent.id.clone()).or_insert(i);
        }
        let mut category_index = HashMap::new();
        for (i, category) in file.categories.iter().enumerate() {
            category_index.entry(category.id.clone()).or_insert(i);
        }
        Self {
            agents: file.agents,
            categories: file.categories,
            agent_index,
            category_index,
        }
    }

    /// All agents in catalog order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// All categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agent_index.get(id).map(|&i| &self.agents[i])
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    /// Agents whose `category` equals `category_id`. Empty for unknown ids.
    pub fn agents_in_category(&self, category_id: &str) -> Vec<&Agent> {
        self.agents
            .iter()
            .filter(|agent| agent.category == category_id)
            .collect()
    }

    /// Case-insensitive substring search across id, name, description, and
    /// tags. An empty query matches every agent.
    pub fn search(&self, query: &str) -> Vec<&Agent> {
        let query = query.to_lowercase();

        self.agents
            .iter()
            .filter(|agent| {
                agent.id.to_lowercase().contains(&query)
                    || agent.name.to_lowercase().contains(&query)
                    || agent.description.to_lowercase().contains(&query)
                    || agent
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Agents with at least one tag case-insensitively equal to one of the
    /// requested tags. Unlike `search`, tags must match exactly here:
    /// requesting "frontend" does not match a "frontend-advanced" tag.
    pub fn filter_by_tags(&self, tags: &[String]) -> Vec<&Agent> {
        let wanted: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();

        self.agents
            .iter()
            .filter(|agent| {
                agent
                    .tags
                    .iter()
                    .any(|tag| wanted.contains(&tag.to_lowercase()))
            })
            .collect()
    }
}
