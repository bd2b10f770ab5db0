use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::time::parse_timestamp;

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Where an event happened. `place` is the free-text label the region table matches on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lng: f64,
    pub place: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Casualties {
    #[serde(deserialize_with = "null_as_default")]
    pub killed: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub injured: u32,
}

impl Casualties {
    pub fn total(&self) -> u64 {
        u64::from(self.killed) + u64::from(self.injured)
    }
}

/// Physical and utility impact of a single event.
///
/// The counts are magnitudes; the two flags only record whether the
/// utility was disrupted at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfrastructureDamage {
    #[serde(deserialize_with = "null_as_default")]
    pub buildings_destroyed: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub roads_damaged: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub hospitals_impacted: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub power_outages: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub water_disruption: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
}

/// One recorded incident. Immutable once loaded into the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// ISO-8601 instant as it appears in the dataset.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub intensity: f64,
    #[serde(default)]
    pub casualties: Casualties,
    #[serde(default)]
    pub infrastructure_damage: InfrastructureDamage,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Event {
    /// Parsed UTC instant, or `None` when the dataset timestamp is unparsable.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }

    /// Case-insensitive substring match against headline, place and actors.
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.headline.to_lowercase().contains(needle)
            || self.location.place.to_lowercase().contains(needle)
            || self
                .actors
                .iter()
                .any(|actor| actor.to_lowercase().contains(needle))
    }
}
