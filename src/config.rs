//! Region table configuration
//!
//! The table maps region display names to the exact `place` labels that
//! belong to them. Declaration order is significant: aggregation output
//! follows it, and a place listed under two regions goes to the first.

use crate::error::{AtlasError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegionGroup {
    pub name: String,
    #[serde(default)]
    pub places: Vec<String>,
}

impl RegionGroup {
    pub fn new(name: impl Into<String>, places: &[&str]) -> Self {
        Self {
            name: name.into(),
            places: places.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn contains(&self, place: &str) -> bool {
        self.places.iter().any(|p| p == place)
    }
}

#[derive(Deserialize)]
struct RegionFile {
    #[serde(default, rename = "region")]
    regions: Vec<RegionGroup>,
}

/// Ordered, many-to-one mapping from place label to region name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionTable {
    groups: Vec<RegionGroup>,
}

impl RegionTable {
    pub fn new(groups: Vec<RegionGroup>) -> Result<Self> {
        let mut seen = HashSet::new();
        for group in &groups {
            if !seen.insert(group.name.as_str()) {
                return Err(AtlasError::DuplicateRegion(group.name.clone()));
            }
        }
        Ok(Self { groups })
    }

    /// Parse a table of `[[region]]` entries.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RegionFile = toml::from_str(content)?;
        Self::new(file.regions)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AtlasError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), regions = table.len(), "loaded region table");
        Ok(table)
    }

    pub fn groups(&self) -> &[RegionGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Index of the first region whose place set contains `place`
    pub fn region_index(&self, place: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(place))
    }

    pub fn region_of(&self, place: &str) -> Option<&str> {
        self.region_index(place).map(|i| self.groups[i].name.as_str())
    }
}

impl Default for RegionTable {
    /// The region groups shipped with the bundled Gaza dataset.
    fn default() -> Self {
        Self {
            groups: vec![
                RegionGroup::new(
                    "Northern Gaza",
                    &[
                        "Northern Gaza (near aid distribution)",
                        "Northern Gaza (aid queue site)",
                        "Northern Gaza (Zikim entry routes / aid queues)",
                        "Northern Gaza (aid/queue sites)",
                        "Northern Gaza (food distribution centre)",
                        "Northern Gaza (Zikim crossing area)",
                        "Beit Lahia (north Gaza)",
                    ],
                ),
                RegionGroup::new(
                    "Central Gaza",
                    &["Deir al-Balah / Central Gaza", "Gaza City (central market)"],
                ),
                RegionGroup::new(
                    "Southern Gaza",
                    &[
                        "Southern Gaza (aid convoy area)",
                        "Khan Younis / aid queue areas",
                        "Rafah / aid site region",
                    ],
                ),
                RegionGroup::new(
                    "Gaza City",
                    &[
                        "Gaza City (residential)",
                        "Gaza City (al-Tuffah / Al-Ahli area)",
                        "Gaza City (residential neighbourhoods)",
                    ],
                ),
                RegionGroup::new(
                    "Gaza Strip",
                    &[
                        "Gaza Strip (various)",
                        "Gaza Strip (food/humanitarian context)",
                        "Gaza (various) - aid access context",
                        "Gaza (near a medical centre)",
                        "Gaza (hospital site)",
                        "Gaza (near medical centre)",
                    ],
                ),
            ],
        }
    }
}
