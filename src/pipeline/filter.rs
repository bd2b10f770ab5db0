//! Filter engine
//!
//! Category and free-text predicates applied conjunctively, result sorted
//! oldest first. Stateless: the caller owns the query and whatever
//! selection state depends on the result.

use super::order::{sort_by_time, sort_indices_by_time, TimeOrder};
use crate::model::{CategoryFilter, Event};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterQuery {
    pub category: CategoryFilter,
    /// Raw search text as typed. Blank (after trimming) disables the text predicate.
    pub search: String,
}

impl FilterQuery {
    pub fn new(category: &str, search: &str) -> Self {
        Self {
            category: CategoryFilter::from_selector(category),
            search: search.to_string(),
        }
    }

    /// Lower-cased search needle, or `None` when the search box is blank.
    ///
    /// Only the emptiness check trims; the needle itself keeps its spaces.
    fn needle(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.matches_with(event, self.needle().as_deref())
    }

    fn matches_with(&self, event: &Event, needle: Option<&str>) -> bool {
        self.category.matches(&event.category)
            && needle.map_or(true, |n| event.matches_search(n))
    }
}

/// Events matching `query`, sorted ascending by timestamp.
pub fn filter<'a, I>(events: I, query: &FilterQuery) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let needle = query.needle();
    let kept: Vec<&Event> = events
        .into_iter()
        .filter(|e| query.matches_with(e, needle.as_deref()))
        .collect();
    tracing::debug!(
        category = query.category.as_selector(),
        search = %query.search,
        matched = kept.len(),
        "filtered events"
    );
    sort_by_time(kept, TimeOrder::Ascending)
}

/// Same as [`filter`], returning positions in `events` instead of references.
pub fn filter_indices(events: &[Event], query: &FilterQuery) -> Vec<usize> {
    let needle = query.needle();
    let kept: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| query.matches_with(e, needle.as_deref()))
        .map(|(i, _)| i)
        .collect();
    sort_indices_by_time(events, kept, TimeOrder::Ascending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::{event, event_at};

    fn ids<'a>(events: &[&'a Event]) -> Vec<&'a str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn search_hits_headline_only_where_present() {
        let mut a = event_at("a", "2025-08-01T00:00:00Z");
        a.headline = "Strike on market".into();
        let mut b = event_at("b", "2025-08-02T00:00:00Z");
        b.headline = "Aid convoy blocked".into();
        let events = vec![a, b];

        let out = filter(&events, &FilterQuery::new("all", "strike"));
        assert_eq!(ids(&out), ["a"]);
    }

    #[test]
    fn search_covers_place_and_actors() {
        let mut by_place = event("p");
        by_place.location.place = "Khan Younis / aid queue areas".into();
        let mut by_actor = event("q");
        by_actor.actors = vec!["Civil Defence".into()];
        let events = vec![by_place, by_actor];

        assert_eq!(ids(&filter(&events, &FilterQuery::new("all", "KHAN"))), ["p"]);
        assert_eq!(ids(&filter(&events, &FilterQuery::new("all", "defence"))), ["q"]);
    }

    #[test]
    fn category_and_search_are_conjunctive() {
        let mut a = event("a");
        a.category = "airstrike".into();
        a.headline = "Strike on camp".into();
        let mut b = event("b");
        b.category = "drone_strike".into();
        b.headline = "Strike on car".into();
        let events = vec![a, b];

        let out = filter(&events, &FilterQuery::new("drone_strike", "strike"));
        assert_eq!(ids(&out), ["b"]);
        assert!(filter(&events, &FilterQuery::new("humanitarian", "strike")).is_empty());
    }

    #[test]
    fn blank_search_is_ignored() {
        let events = vec![event("a"), event("b")];
        assert_eq!(filter(&events, &FilterQuery::new("all", "   ")).len(), 2);
    }

    #[test]
    fn needle_keeps_inner_spaces() {
        let mut a = event("a");
        a.headline = "Strike on market".into();
        let events = vec![a];
        assert_eq!(filter(&events, &FilterQuery::new("all", "on m")).len(), 1);
        assert!(filter(&events, &FilterQuery::new("all", " strike")).is_empty());
    }

    #[test]
    fn indices_match_references() {
        let mut a = event_at("a", "2025-08-03T00:00:00Z");
        a.category = "airstrike".into();
        let mut b = event_at("b", "2025-08-01T00:00:00Z");
        b.category = "airstrike".into();
        let c = event_at("c", "2025-08-02T00:00:00Z");
        let events = vec![a, b, c];
        let query = FilterQuery::new("airstrike", "");

        let idx = filter_indices(&events, &query);
        assert_eq!(idx, [1, 0]);
        let refs: Vec<&str> = idx.iter().map(|&i| events[i].id.as_str()).collect();
        assert_eq!(refs, ids(&filter(&events, &query)));
    }
}
