use crate::charts::{timeline_span, TimelineSpan};
use crate::config::RegionTable;
use crate::model::{CategoryFilter, Event};
use crate::pipeline::{
    filter_indices, find_region, group_by_region, summarize, FilterQuery, RegionSummary, Summary,
};
use crate::selection::{FilterChanged, FilterListener, NavKey, TimelineCursor};
use crate::store::EventStore;

/// Dashboard session state
///
/// Owns the read-only store and the region table, plus the state the views
/// hang off: the active query, the filtered timeline, the timeline cursor
/// and the region picked for drill-down.
pub struct Dashboard {
    store: EventStore,
    regions: RegionTable,
    query: FilterQuery,
    /// Positions in the store, oldest first
    visible: Vec<usize>,
    cursor: TimelineCursor,
    selected_region: Option<String>,
}

impl Dashboard {
    pub fn new(store: EventStore, regions: RegionTable) -> Self {
        let query = FilterQuery::default();
        let visible = filter_indices(store.events(), &query);
        Self {
            store,
            regions,
            query,
            visible,
            cursor: TimelineCursor::default(),
            selected_region: None,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn region_table(&self) -> &RegionTable {
        &self.regions
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    /// Replace the active query, recompute the timeline and notify the cursor
    pub fn apply_query(&mut self, query: FilterQuery) -> FilterChanged {
        self.visible = filter_indices(self.store.events(), &query);
        self.query = query;
        let change = FilterChanged {
            query: self.query.clone(),
            visible: self.visible.len(),
        };
        self.cursor.filter_changed(&change);
        change
    }

    pub fn set_search(&mut self, term: &str) -> FilterChanged {
        let query = FilterQuery {
            search: term.to_string(),
            ..self.query.clone()
        };
        self.apply_query(query)
    }

    pub fn set_category(&mut self, selector: &str) -> FilterChanged {
        let query = FilterQuery {
            category: CategoryFilter::from_selector(selector),
            ..self.query.clone()
        };
        self.apply_query(query)
    }

    /// Filtered timeline, oldest first
    pub fn timeline(&self) -> Vec<&Event> {
        let events = self.store.events();
        self.visible.iter().filter_map(|&i| events.get(i)).collect()
    }

    pub fn timeline_len(&self) -> usize {
        self.visible.len()
    }

    /// Totals for the summary card, over the filtered timeline
    pub fn summary(&self) -> Summary {
        summarize(self.timeline())
    }

    pub fn timeline_span(&self) -> Option<TimelineSpan> {
        timeline_span(&self.timeline())
    }

    /// Regional view, always over the full dataset
    pub fn regions(&self) -> Vec<RegionSummary<'_>> {
        group_by_region(self.store.iter(), &self.regions)
    }

    /// Moves are clamped to the filtered timeline
    pub fn handle_key(&mut self, key: NavKey) {
        self.cursor.handle_key(key, self.visible.len());
    }

    pub fn cursor(&self) -> &TimelineCursor {
        &self.cursor
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.event_at(self.cursor.selected()?)
    }

    pub fn expanded_event(&self) -> Option<&Event> {
        self.event_at(self.cursor.expanded()?)
    }

    fn event_at(&self, timeline_index: usize) -> Option<&Event> {
        let idx = *self.visible.get(timeline_index)?;
        self.store.events().get(idx)
    }

    /// Select a region for drill-down; picking the selected one again clears it
    pub fn toggle_region(&mut self, name: &str) {
        if self.selected_region.as_deref() == Some(name) {
            self.selected_region = None;
        } else {
            self.selected_region = Some(name.to_string());
        }
    }

    pub fn clear_region(&mut self) {
        self.selected_region = None;
    }

    pub fn selected_region(&self) -> Option<&str> {
        self.selected_region.as_deref()
    }

    /// Events of the selected region, newest first. Empty when nothing is selected.
    pub fn region_events(&self) -> Vec<&Event> {
        let Some(name) = self.selected_region.as_deref() else {
            return Vec::new();
        };
        let summaries = self.regions();
        find_region(&summaries, name)
            .map(|r| r.events_newest_first())
            .unwrap_or_default()
    }
}
