use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::model::Event;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeOrder {
    /// Oldest first (timeline, charts).
    Ascending,
    /// Newest first (region drill-down).
    Descending,
}

/// Stable sort of events by parsed timestamp.
///
/// Unparsable timestamps always go last regardless of direction, in their
/// input order. Ties keep input order too.
pub fn sort_by_time<'a, I>(events: I, order: TimeOrder) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut keyed: Vec<(Option<DateTime<Utc>>, &'a Event)> =
        events.into_iter().map(|e| (e.instant(), e)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_instants(a.as_ref(), b.as_ref(), order));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// Same ordering as [`sort_by_time`], applied to indices into `events`.
pub fn sort_indices_by_time(events: &[Event], indices: Vec<usize>, order: TimeOrder) -> Vec<usize> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, usize)> = indices
        .into_iter()
        .map(|i| (events.get(i).and_then(Event::instant), i))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_instants(a.as_ref(), b.as_ref(), order));
    keyed.into_iter().map(|(_, i)| i).collect()
}

fn compare_instants(
    a: Option<&DateTime<Utc>>,
    b: Option<&DateTime<Utc>>,
    order: TimeOrder,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            TimeOrder::Ascending => a.cmp(b),
            TimeOrder::Descending => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
