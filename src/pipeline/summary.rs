use serde::Serialize;

use crate::model::Event;

/// Flat totals over an event subset, for the dashboard summary card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_events: usize,
    pub total_killed: u64,
    pub total_injured: u64,
    pub total_buildings_destroyed: u64,
    pub total_hospitals_impacted: u64,
}

pub fn summarize<'a, I>(events: I) -> Summary
where
    I: IntoIterator<Item = &'a Event>,
{
    events.into_iter().fold(Summary::default(), |mut acc, e| {
        acc.total_events += 1;
        acc.total_killed += u64::from(e.casualties.killed);
        acc.total_injured += u64::from(e.casualties.injured);
        acc.total_buildings_destroyed += u64::from(e.infrastructure_damage.buildings_destroyed);
        acc.total_hospitals_impacted += u64::from(e.infrastructure_damage.hospitals_impacted);
        acc
    })
}

/// Headline figures on the charts page, always over the whole dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineStats {
    pub total_killed: u64,
    pub buildings_destroyed: u64,
    pub total_events: usize,
    /// Mean intensity, 0 when there are no events.
    pub average_intensity: f64,
}

pub fn headline_stats<'a, I>(events: I) -> HeadlineStats
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut stats = HeadlineStats::default();
    let mut intensity_sum = 0.0;
    for e in events {
        stats.total_events += 1;
        stats.total_killed += u64::from(e.casualties.killed);
        stats.buildings_destroyed += u64::from(e.infrastructure_damage.buildings_destroyed);
        intensity_sum += e.intensity;
    }
    if stats.total_events > 0 {
        stats.average_intensity = intensity_sum / stats.total_events as f64;
    }
    stats
}
