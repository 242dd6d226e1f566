//! Search view state
//!
//! Owns the active criteria and the last result set, and tracks whether the
//! user has run a search yet (the listing header reads differently before
//! the first search).

use homescope::catalog::{PropertyCatalog, SearchCriteria};

/// State behind the search/listing view
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Criteria the next search will run with
    pub criteria: SearchCriteria,
    results: Vec<String>,
    has_searched: bool,
}

impl SearchState {
    /// Fresh state showing the whole catalog
    pub fn new(catalog: &PropertyCatalog) -> Self {
        Self {
            criteria: SearchCriteria::new(),
            results: all_ids(catalog),
            has_searched: false,
        }
    }

    /// Apply the current criteria to the catalog
    pub fn run_search(&mut self, catalog: &PropertyCatalog) {
        self.results = catalog
            .search(&self.criteria)
            .into_iter()
            .map(|p| p.id.clone())
            .collect();
        self.has_searched = true;
    }

    /// Clear the criteria and show the whole catalog again
    pub fn reset(&mut self, catalog: &PropertyCatalog) {
        self.criteria = SearchCriteria::new();
        self.results = all_ids(catalog);
        self.has_searched = false;
    }

    /// Ids of the listings in the current result set, in fixture order
    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Number of listings in the current result set
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Whether the user has run a search since the last reset
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }
}

fn all_ids(catalog: &PropertyCatalog) -> Vec<String> {
    catalog.all().iter().map(|p| p.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shows_everything() {
        let catalog = PropertyCatalog::bundled();
        let state = SearchState::new(&catalog);
        assert_eq!(state.result_count(), catalog.len());
        assert!(!state.has_searched());
    }

    #[test]
    fn test_run_search_filters_results() {
        let catalog = PropertyCatalog::bundled();
        let mut state = SearchState::new(&catalog);

        state.criteria = SearchCriteria::new().with_type("Flat");
        state.run_search(&catalog);

        assert!(state.has_searched());
        assert!(state.result_count() < catalog.len());
        for id in state.results() {
            assert_eq!(catalog.get(id).unwrap().property_type, "Flat");
        }
    }

    #[test]
    fn test_results_preserve_fixture_order() {
        let catalog = PropertyCatalog::bundled();
        let mut state = SearchState::new(&catalog);
        state.run_search(&catalog);

        let fixture_order: Vec<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        let result_order: Vec<&str> = state.results().iter().map(String::as_str).collect();
        assert_eq!(result_order, fixture_order);
    }

    #[test]
    fn test_reset_restores_everything() {
        let catalog = PropertyCatalog::bundled();
        let mut state = SearchState::new(&catalog);

        state.criteria = SearchCriteria::new().price_range(1, 2);
        state.run_search(&catalog);
        assert_eq!(state.result_count(), 0);

        state.reset(&catalog);
        assert_eq!(state.result_count(), catalog.len());
        assert!(!state.has_searched());
        assert_eq!(state.criteria, SearchCriteria::new());
    }
}
