//! # Listing State
//!
//! Transient search/tag state for the Projects page. Transitions are
//! synchronous; the state owns nothing but the query text and the selected
//! tag, and applies them through the filter engine.

use serde::{Deserialize, Serialize};

use crate::catalog::{filter, Catalog, Project};

/// Coarse mode of the listing, for display decisions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ListingMode {
    /// No query and no tag selected; the full catalog shows
    Idle,
    /// A query and/or tag constrains the listing
    Filtered,
}

/// Search text plus selected tag, as owned by the Projects page
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    query: String,
    selected_tag: Option<String>,
}

impl ListingState {
    pub fn new(query: impl Into<String>, selected_tag: Option<String>) -> Self {
        Self {
            query: query.into(),
            selected_tag,
        }
    }

    /// Replace the search text (fires on every input change)
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clear the search field
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Select a tag badge, or `None` for "All Projects".
    ///
    /// Re-selecting the already-selected tag keeps it selected; `None` is
    /// the only way back to the unfiltered tag state.
    pub fn select_tag(&mut self, tag: Option<String>) {
        self.selected_tag = tag;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn mode(&self) -> ListingMode {
        if self.query.is_empty() && self.selected_tag.is_none() {
            ListingMode::Idle
        } else {
            ListingMode::Filtered
        }
    }

    /// Run the current constraints against the catalog
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Project> {
        filter(catalog.projects(), &self.query, self.selected_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = ListingState::default();
        assert_eq!(state.mode(), ListingMode::Idle);
    }

    #[test]
    fn test_query_or_tag_moves_to_filtered() {
        let mut state = ListingState::default();
        state.set_query("react");
        assert_eq!(state.mode(), ListingMode::Filtered);

        let mut state = ListingState::default();
        state.select_tag(Some("Game".to_string()));
        assert_eq!(state.mode(), ListingMode::Filtered);
    }

    #[test]
    fn test_clearing_both_returns_to_idle() {
        let mut state = ListingState::new("react", Some("Game".to_string()));
        state.clear_query();
        assert_eq!(state.mode(), ListingMode::Filtered);
        state.select_tag(None);
        assert_eq!(state.mode(), ListingMode::Idle);
    }

    #[test]
    fn test_reselecting_tag_does_not_deselect() {
        // Clicking the active badge again leaves it active; only the
        // "All Projects" badge clears the tag.
        let mut state = ListingState::default();
        state.select_tag(Some("React".to_string()));
        state.select_tag(Some("React".to_string()));
        assert_eq!(state.selected_tag(), Some("React"));
        state.select_tag(None);
        assert_eq!(state.selected_tag(), None);
    }

    #[test]
    fn test_apply_filters_the_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = ListingState::default();
        assert_eq!(state.apply(&catalog).len(), catalog.len());

        state.set_query("socket");
        let hits = state.apply(&catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "chat-app");
    }
}
