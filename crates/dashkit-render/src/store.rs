//! Request-scoped application state.

use crate::history::{Location, MemoryHistory};

/// Application state built for a single request and dropped with it.
#[derive(Debug, Clone)]
pub struct RequestStore {
    /// Location the request arrived at.
    pub initial_location: Location,
    /// Site title for headers and breadcrumbs.
    pub site_title: String,
}

impl RequestStore {
    /// Build the store from a freshly seeded history.
    pub fn new(history: &MemoryHistory, site_title: impl Into<String>) -> Self {
        Self {
            initial_location: history.location().clone(),
            site_title: site_title.into(),
        }
    }

    /// Look up a query parameter on the initial location.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.initial_location
            .search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_snapshots_initial_location() {
        let mut history = MemoryHistory::new("/apps/files?view=grid&sort");
        let store = RequestStore::new(&history, "Dashkit");
        history.replace("/elsewhere");

        assert_eq!(store.initial_location.pathname, "/apps/files");
        assert_eq!(store.query_param("view"), Some("grid"));
        assert_eq!(store.query_param("sort"), Some(""));
        assert_eq!(store.query_param("missing"), None);
    }
}
