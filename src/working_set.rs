/// The view's working set: the ordered tabs currently displayed and mutated.

use std::collections::HashSet;

use crate::operations::{filter_tabs, group_by_host, matches_query, merge_by_id};
use crate::tab_record::TabRecord;

/// Ordered collection of tab records with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingSet {
    tabs: Vec<TabRecord>,
}

impl WorkingSet {
    pub fn new() -> Self {
        WorkingSet { tabs: Vec::new() }
    }

    /// Build the working set from the stored snapshot and the live tabs.
    ///
    /// Stored records win for ids present in both. The result is in display
    /// order (grouped by host, titles sorted).
    pub fn reconcile(stored: &[TabRecord], live: &[TabRecord]) -> Self {
        WorkingSet {
            tabs: group_by_host(&merge_by_id(stored, live)),
        }
    }

    pub fn tabs(&self) -> &[TabRecord] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Remove one tab by id. Returns whether anything was removed.
    pub fn remove(&mut self, tab_id: i32) -> bool {
        let original_len = self.tabs.len();
        self.tabs.retain(|t| t.id != tab_id);
        self.tabs.len() < original_len
    }

    /// Remove every tab whose id is in `tab_ids`. Returns how many went.
    pub fn remove_many(&mut self, tab_ids: &[i32]) -> usize {
        let doomed: HashSet<i32> = tab_ids.iter().copied().collect();
        let original_len = self.tabs.len();
        self.tabs.retain(|t| !doomed.contains(&t.id));
        original_len - self.tabs.len()
    }

    pub fn clear(&mut self) {
        self.tabs.clear();
    }

    pub fn urls(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.url.clone()).collect()
    }

    /// URLs of the selected tabs visible under `query`, in working-set order.
    ///
    /// Selected ids that are filtered out or no longer in the set are ignored.
    pub fn selected_urls(&self, selection: &HashSet<i32>, query: &str) -> Vec<String> {
        self.selected_visible(selection, query)
            .map(|t| t.url.clone())
            .collect()
    }

    /// How many selected tabs are visible under `query`.
    pub fn selected_count(&self, selection: &HashSet<i32>, query: &str) -> usize {
        self.selected_visible(selection, query).count()
    }

    fn selected_visible<'a>(
        &'a self,
        selection: &'a HashSet<i32>,
        query: &str,
    ) -> impl Iterator<Item = &'a TabRecord> + 'a {
        let query = query.to_lowercase();
        self.tabs.iter().filter(move |t| {
            selection.contains(&t.id) && matches_query(t, &query)
        })
    }

    /// The records to render for a filter query.
    pub fn filtered(&self, query: &str) -> Vec<TabRecord> {
        filter_tabs(&self.tabs, query)
    }
}
