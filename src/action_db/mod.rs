//! Catalog of known host actions.
//!
//! The catalog is embedded in the binary at compile time and describes the
//! actions a host installation is expected to register. It backs the
//! `actions` CLI command and the validator's did-you-mean suggestions.
//! Whether an action actually fires is decided at execution time by the
//! `ActionRegistry`, so catalog membership is advisory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category of actions for organization in pickers and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCategory {
    /// Category id (e.g., "editing", "segment_editor")
    pub id: String,
    /// Display name
    pub name: String,
    /// Description of what actions the category holds
    pub description: String,
}

/// A single catalog entry describing a known action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Action identifier (e.g., "edit_undo")
    pub id: String,
    /// Display name (e.g., "Undo")
    pub name: String,
    /// Category id
    pub category: String,
    /// Human-readable description
    pub description: String,
}

/// Catalog schema from actions.json.
#[derive(Debug, Clone, Deserialize)]
struct ActionCatalog {
    #[allow(dead_code)]
    version: String,
    categories: Vec<ActionCategory>,
    actions: Vec<ActionDescriptor>,
}

/// Embedded action catalog with fast id lookup and scored search.
#[derive(Debug, Clone)]
pub struct ActionDb {
    actions: Vec<ActionDescriptor>,
    categories: Vec<ActionCategory>,
    lookup: HashMap<String, usize>,
}

impl ActionDb {
    /// Loads the catalog from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("actions.json");
        let catalog: ActionCatalog =
            serde_json::from_str(json_data).context("Failed to parse embedded actions.json")?;

        let lookup = catalog
            .actions
            .iter()
            .enumerate()
            .map(|(idx, action)| (action.id.clone(), idx))
            .collect();

        Ok(Self {
            actions: catalog.actions,
            categories: catalog.categories,
            lookup,
        })
    }

    /// Checks whether an action id is present in the catalog.
    #[must_use]
    pub fn is_known(&self, action_id: &str) -> bool {
        self.lookup.contains_key(action_id)
    }

    /// Gets a descriptor by action id.
    #[must_use]
    pub fn get(&self, action_id: &str) -> Option<&ActionDescriptor> {
        let idx = self.lookup.get(action_id)?;
        self.actions.get(*idx)
    }

    /// Searches the catalog by substring match on id, name, or description.
    ///
    /// Results are ordered by relevance: exact matches first, then prefix
    /// matches, then id/name substrings, then description substrings.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&ActionDescriptor> {
        if query.is_empty() {
            return self.actions.iter().collect();
        }

        let query_lower = query.to_lowercase();
        let mut results: Vec<(&ActionDescriptor, i32)> = self
            .actions
            .iter()
            .filter_map(|action| {
                let id_lower = action.id.to_lowercase();
                let name_lower = action.name.to_lowercase();
                let desc_lower = action.description.to_lowercase();

                if id_lower == query_lower || name_lower == query_lower {
                    return Some((action, 100));
                }
                if id_lower.starts_with(&query_lower) || name_lower.starts_with(&query_lower) {
                    return Some((action, 50));
                }
                if id_lower.contains(&query_lower) || name_lower.contains(&query_lower) {
                    return Some((action, 10));
                }
                if desc_lower.contains(&query_lower) {
                    return Some((action, 5));
                }
                None
            })
            .collect();

        results.sort_by(|a, b| b.1.cmp(&a.1));
        results.into_iter().map(|(action, _)| action).collect()
    }

    /// Gets all actions in a category.
    #[must_use]
    pub fn actions_in_category(&self, category_id: &str) -> Vec<&ActionDescriptor> {
        self.actions
            .iter()
            .filter(|a| a.category == category_id)
            .collect()
    }

    /// Gets all category descriptors.
    #[must_use]
    pub fn categories(&self) -> &[ActionCategory] {
        &self.categories
    }

    /// Gets a category by id.
    #[must_use]
    pub fn get_category(&self, id: &str) -> Option<&ActionCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Total number of cataloged actions.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> ActionDb {
        ActionDb::load().expect("Failed to load action catalog")
    }

    #[test]
    fn test_load_catalog() {
        let db = db();
        assert!(db.action_count() >= 15);
        assert!(db.categories().len() >= 5);
    }

    #[test]
    fn test_is_known() {
        let db = db();
        assert!(db.is_known("edit_undo"));
        assert!(db.is_known("segment_previous"));
        assert!(!db.is_known("nonexistent_action"));
        assert!(!db.is_known(""));
    }

    #[test]
    fn test_get_descriptor() {
        let db = db();
        let action = db.get("edit_undo").unwrap();
        assert_eq!(action.name, "Undo");
        assert_eq!(action.category, "editing");
    }

    #[test]
    fn test_search_exact_match_first() {
        let db = db();
        let results = db.search("edit_undo");
        assert!(!results.is_empty());
        assert_eq!(results[0].id, "edit_undo");
    }

    #[test]
    fn test_search_partial_match() {
        let db = db();
        let results = db.search("segment");
        assert!(results.iter().any(|a| a.id == "segment_next"));
        assert!(results.iter().any(|a| a.id == "segment_previous"));
    }

    #[test]
    fn test_search_case_insensitive() {
        let db = db();
        assert_eq!(db.search("UNDO").len(), db.search("undo").len());
        assert!(!db.search("UNDO").is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let db = db();
        assert_eq!(db.search("").len(), db.action_count());
    }

    #[test]
    fn test_actions_in_category() {
        let db = db();
        let editing = db.actions_in_category("editing");
        assert!(editing.iter().any(|a| a.id == "edit_undo"));
        assert!(editing.iter().all(|a| a.category == "editing"));
    }

    #[test]
    fn test_get_category() {
        let db = db();
        let cat = db.get_category("segment_editor").unwrap();
        assert_eq!(cat.name, "Segment Editor");
        assert!(db.get_category("bogus").is_none());
    }
}
