//! Region aggregator
//!
//! Buckets events into the configured region groups and computes per-region
//! totals. Events whose place is not listed in any group are left out of
//! every bucket; they are still visible on the timeline.

use serde::Serialize;

use super::order::{sort_by_time, TimeOrder};
use crate::config::RegionTable;
use crate::model::Event;

/// Infrastructure totals for a region.
///
/// `buildings_destroyed` and `hospitals_impacted` are summed magnitudes.
/// `power_outages` and `water_disruption` count events where the flag was
/// set, so they are numbers of incidents, not amounts of damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InfrastructureTotals {
    pub buildings_destroyed: u64,
    pub power_outages: u64,
    pub hospitals_impacted: u64,
    pub water_disruption: u64,
}

impl InfrastructureTotals {
    fn add(&mut self, event: &Event) {
        let damage = &event.infrastructure_damage;
        self.buildings_destroyed += u64::from(damage.buildings_destroyed);
        self.hospitals_impacted += u64::from(damage.hospitals_impacted);
        self.power_outages += u64::from(damage.power_outages);
        self.water_disruption += u64::from(damage.water_disruption);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary<'a> {
    pub name: String,
    /// Events bucketed into this region, in input order.
    #[serde(skip)]
    pub events: Vec<&'a Event>,
    pub total_events: usize,
    /// Mean intensity, 0 for an empty region.
    pub average_intensity: f64,
    /// Sum of killed + injured.
    pub total_casualties: u64,
    pub total_infrastructure_damage: InfrastructureTotals,
}

impl<'a> RegionSummary<'a> {
    fn from_bucket(name: &str, events: Vec<&'a Event>) -> Self {
        let total_events = events.len();
        let average_intensity = if total_events > 0 {
            events.iter().map(|e| e.intensity).sum::<f64>() / total_events as f64
        } else {
            0.0
        };
        let total_casualties = events.iter().map(|e| e.casualties.total()).sum();
        let mut total_infrastructure_damage = InfrastructureTotals::default();
        for event in &events {
            total_infrastructure_damage.add(event);
        }

        Self {
            name: name.to_string(),
            events,
            total_events,
            average_intensity,
            total_casualties,
            total_infrastructure_damage,
        }
    }

    /// This region's events, newest first (unparsable timestamps last).
    pub fn events_newest_first(&self) -> Vec<&'a Event> {
        sort_by_time(self.events.iter().copied(), TimeOrder::Descending)
    }
}

/// One summary per region in `table`, in table order, empty regions included.
pub fn group_by_region<'a, I>(events: I, table: &RegionTable) -> Vec<RegionSummary<'a>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut buckets: Vec<Vec<&'a Event>> = vec![Vec::new(); table.len()];
    let mut unmapped = 0usize;

    for event in events {
        match table.region_index(&event.location.place) {
            Some(idx) => buckets[idx].push(event),
            None => unmapped += 1,
        }
    }

    if unmapped > 0 {
        tracing::debug!(unmapped, "events left out of regional aggregates");
    }

    table
        .groups()
        .iter()
        .zip(buckets)
        .map(|(group, bucket)| RegionSummary::from_bucket(&group.name, bucket))
        .collect()
}

/// Find a region summary by name.
pub fn find_region<'s, 'a>(
    summaries: &'s [RegionSummary<'a>],
    name: &str,
) -> Option<&'s RegionSummary<'a>> {
    summaries.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegionGroup;
    use crate::pipeline::test_support::{event_at, event_in};

    fn table() -> RegionTable {
        RegionTable::new(vec![
            RegionGroup::new("North", &["Beit Lahia", "Jabalia"]),
            RegionGroup::new("South", &["Rafah"]),
            RegionGroup::new("Quiet", &["Nowhere"]),
        ])
        .unwrap()
    }

    #[test]
    fn one_entry_per_region_in_table_order() {
        let events = vec![event_in("a", "Rafah"), event_in("b", "Jabalia")];
        let out = group_by_region(&events, &table());
        let names: Vec<_> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["North", "South", "Quiet"]);
        assert_eq!(out[0].total_events, 1);
        assert_eq!(out[1].total_events, 1);
    }

    #[test]
    fn empty_region_is_all_zero() {
        let events = vec![event_in("a", "Rafah")];
        let out = group_by_region(&events, &table());
        let quiet = find_region(&out, "Quiet").unwrap();
        assert_eq!(quiet.total_events, 0);
        assert_eq!(quiet.average_intensity, 0.0);
        assert_eq!(quiet.total_casualties, 0);
        assert_eq!(quiet.total_infrastructure_damage, InfrastructureTotals::default());
        assert!(quiet.events.is_empty());
    }

    #[test]
    fn unmapped_places_are_dropped() {
        let events = vec![
            event_in("a", "Rafah"),
            event_in("b", "rafah"),
            event_in("c", "Somewhere else"),
        ];
        let out = group_by_region(&events, &table());
        let total: usize = out.iter().map(|r| r.total_events).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn averages_and_casualties() {
        let mut a = event_in("a", "Beit Lahia");
        a.intensity = 9.0;
        a.casualties.killed = 3;
        a.casualties.injured = 5;
        let mut b = event_in("b", "Jabalia");
        b.intensity = 6.0;
        b.casualties.killed = 1;
        let events = vec![a, b];

        let north = &group_by_region(&events, &table())[0];
        assert_eq!(north.average_intensity, 7.5);
        assert_eq!(north.total_casualties, 9);
    }

    #[test]
    fn utility_flags_count_occurrences() {
        let mut a = event_in("a", "Rafah");
        a.infrastructure_damage.power_outages = true;
        a.infrastructure_damage.water_disruption = true;
        a.infrastructure_damage.buildings_destroyed = 12;
        a.infrastructure_damage.hospitals_impacted = 1;
        let mut b = event_in("b", "Rafah");
        b.infrastructure_damage.power_outages = false;
        b.infrastructure_damage.water_disruption = true;
        b.infrastructure_damage.buildings_destroyed = 3;
        b.infrastructure_damage.roads_damaged = 40;
        let events = vec![a, b];

        let south = &group_by_region(&events, &table())[1];
        let totals = south.total_infrastructure_damage;
        assert_eq!(totals.power_outages, 1);
        assert_eq!(totals.water_disruption, 2);
        assert_eq!(totals.buildings_destroyed, 15);
        assert_eq!(totals.hospitals_impacted, 1);
    }

    #[test]
    fn drill_down_is_newest_first() {
        let mut old = event_at("old", "2025-07-01T00:00:00Z");
        old.location.place = "Rafah".into();
        let mut new = event_at("new", "2025-08-01T00:00:00Z");
        new.location.place = "Rafah".into();
        let mut bad = event_at("bad", "n/a");
        bad.location.place = "Rafah".into();
        let events = vec![old, bad, new];

        let out = group_by_region(&events, &table());
        let ids: Vec<_> = out[1]
            .events_newest_first()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["new", "old", "bad"]);
    }

    #[test]
    fn empty_table_yields_nothing() {
        let empty = RegionTable::new(Vec::new()).unwrap();
        assert!(group_by_region(&[event_in("a", "Rafah")], &empty).is_empty());
    }
}
